mod classification;
mod cnf;
mod dnf;
mod nnf;

pub use classification::{classify, Classification, NormalFormKind};
pub use cnf::is_cnf;
pub use dnf::is_dnf;
pub use nnf::is_nnf;
