mod refiner;
mod store;

pub use refiner::IConceptRefiner;
pub use store::IConceptStore;
