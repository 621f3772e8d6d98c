//! Design command handlers.

mod generate_design;

pub use generate_design::{
    GenerateDesignCommand, GenerateDesignError, GenerateDesignHandler, GenerateDesignResult,
};
