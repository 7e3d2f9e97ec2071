//! Client-side form validation.
//!
//! 客户端表单校验：字段规则、条件字段集合与聚合校验入口。

mod engine;
mod error_map;
pub mod rules;
pub mod schema;

pub use engine::{validate, validate_login};
pub use error_map::{ErrorMap, FormField};
pub use schema::ConditionalSchema;
