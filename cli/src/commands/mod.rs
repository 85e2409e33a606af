pub mod compose;
pub mod inspect;
pub mod visits;
