// Module declarations
pub(crate) mod goods_errors;
pub(crate) mod goods_model;
pub(crate) mod goods_repository;
pub(crate) mod goods_service;
pub(crate) mod goods_traits;

// Re-export the public interface
pub use goods_model::{
    Good, GoodDB, GoodUpdate, NewGood, PriorityAssignment, RemovedGood, ReprioritizeRequest,
    ReprioritizeResult,
};
pub use goods_repository::GoodsRepository;
pub use goods_service::GoodsService;
pub use goods_traits::{GoodsRepositoryTrait, GoodsServiceTrait};

// Re-export error types for convenience
pub use goods_errors::{GoodError, Result};
