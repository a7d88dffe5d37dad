// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uuid::Uuid;

/// Allocates `count` globally unique ticket identifiers.
///
/// Identifiers are random v4 UUIDs in canonical hyphenated form, one per
/// seat, in seat order.
#[must_use]
pub fn allocate_ids(count: usize) -> Vec<String> {
    (0..count).map(|_| Uuid::new_v4().to_string()).collect()
}
