use trapsort_runner::state::{RuntimeArguments, State};
use trapsort_runner::vm::step;

fn main() {
    let record = step(State::from(RuntimeArguments::with_randoms(5, vec![3, 1, 4, 1, 5])), 5)
        .expect("five words fit into a five word arena");

    assert!(record.output() == [1, 1, 3, 4, 5]);
}
