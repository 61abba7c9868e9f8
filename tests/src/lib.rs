//! Scenarios exercising addresses, frames and cables together.

mod scenarios;
