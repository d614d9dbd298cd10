// SPDX-License-Identifier: Apache-2.0

mod account;
mod common;
mod file;
mod token;
