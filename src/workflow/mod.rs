pub mod branch;
pub mod machine;
