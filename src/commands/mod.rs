// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod interest;
pub mod growth;
pub mod export;
pub mod theme;
pub mod doctor;
