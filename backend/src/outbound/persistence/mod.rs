//! Persistence adapters implementing the domain ports.

mod mongo_recipes;

pub use mongo_recipes::MongoRecipeRepository;
