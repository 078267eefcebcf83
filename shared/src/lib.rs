// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod form;
pub mod submission;

/// Path of the endpoint that accepts registration submissions
pub const REGISTER_PATH: &str = "/users/register";
