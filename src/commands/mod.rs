// Copyright (c) 2025 Centavo Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod expenses;
pub mod debts;
pub mod payments;
pub mod profile;
pub mod dashboard;
pub mod exporter;
