//! Python FFI
use pyo3::prelude::*;

pub mod feedforward;
mod gen_macros;

#[pymodule]
fn rpdeepnet(_py: Python, m: &PyModule) -> PyResult<()> {
    // `print_cost` and the training time go through `tracing`
    crate::logging::try_init();
    feedforward::construct_module(m)?;
    Ok(())
}
