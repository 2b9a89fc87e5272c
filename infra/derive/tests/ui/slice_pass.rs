use sledger_kernel::domain::registry::{FeatureSlice, InitializedSlice};

#[sledger_derive::sledger_slice]
pub struct Counter {
    pub start: u32,
}

fn main() {
    let slice = Counter::new(CounterInner { start: 7 });
    let copy = slice.clone();
    assert_eq!(copy.start, 7);

    let registered = InitializedSlice::new(slice);
    let back = registered.state.as_any().downcast_ref::<Counter>().unwrap();
    assert_eq!(back.start, 7);
}
