// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Code generation for Rayo.
//!
//! This module contains code generators for different target formats:
//! - **`go`**: Go source generation (the `go` toolchain compiles and runs it)
//!
//! Future modules may include other host languages; everything
//! target-specific lives below the target's own module.

pub mod go;
