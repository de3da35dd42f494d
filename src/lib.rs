// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;
pub mod utils;
pub mod commands;
