mod node;
mod property;
mod typed;


pub use node::{ElementSelector, ExprNode, Qualifier, ReduceOp};
pub use property::Property;
pub use typed::{CollectionExpr, EntityElement, Expr};
