//! Brew temperature monitor library - testable modules for the display firmware.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the simulator-specific code;
//! on real hardware the same modules drive the OLED and the status LED directly.
//!
//! # Data Flow
//!
//! ```text
//! probe reads -> burst average -> smoothing buffer -> commit/refine -> history buffer
//!                                                                          |
//!                                    display range + graph screen  <-------+
//!                                    status LED color + pulse      <-------+
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware builds as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod config;
pub mod thresholds;

// Data pipeline
pub mod sample_buffer;
pub mod sampling;

// Rendering
pub mod colors;
pub mod mapper;
pub mod render;
pub mod styles;

// Status LED
pub mod indicator;
