// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request pipeline: hooks run around every transport round trip

mod decorator;

pub use decorator::{RequestDecorator, RequestHooks};
