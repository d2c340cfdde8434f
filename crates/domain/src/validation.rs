// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Compares two strings case-insensitively.
///
/// Usernames, emails, and section identifiers are all matched
/// case-insensitively throughout the booking engine. Every such
/// comparison goes through this helper so the folding behavior stays
/// consistent across call sites.
///
/// # Arguments
///
/// * `left` - The first string
/// * `right` - The second string
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}
