//! Bitmask flags stored on configuration records.
//!
//! Every flag type wraps the raw integer exactly as it is stored. Bit
//! positions are part of the storage contract with existing rows and must
//! never be renumbered. Bits outside the known set are preserved but ignored.

use serde::{Deserialize, Serialize};

/// Record-time tracking flags stored on a table (`record_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordFlags(i32);

impl RecordFlags {
    /// Track the creation time of each row.
    pub const CREATE_TIME: i32 = 1;
    /// Track the last update time of each row.
    pub const UPDATE_TIME: i32 = 2;
    /// Track the soft-delete time of each row.
    pub const DELETE_TIME: i32 = 4;

    /// Wrap a stored mask.
    pub const fn new(mask: i32) -> Self {
        Self(mask)
    }

    /// Build a mask from individual switches.
    pub const fn encode(create: bool, update: bool, delete: bool) -> Self {
        Self(
            bit(create, Self::CREATE_TIME)
                | bit(update, Self::UPDATE_TIME)
                | bit(delete, Self::DELETE_TIME),
        )
    }

    /// The raw stored mask.
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Returns true if the field was never set.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    pub const fn track_create(self) -> bool {
        self.0 & Self::CREATE_TIME != 0
    }

    pub const fn track_update(self) -> bool {
        self.0 & Self::UPDATE_TIME != 0
    }

    pub const fn track_delete(self) -> bool {
        self.0 & Self::DELETE_TIME != 0
    }
}

/// Write permissions and filter usage stored on a column (`update_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateFlags(i32);

impl UpdateFlags {
    /// Column may be set when a row is created.
    pub const CREATE: i32 = 1;
    /// Column may be changed by an update.
    pub const UPDATE: i32 = 2;
    /// Column may be used as a query filter.
    pub const FILTER: i32 = 4;
    /// All known permissions.
    pub const ALL: i32 = Self::CREATE | Self::UPDATE | Self::FILTER;

    pub const fn new(mask: i32) -> Self {
        Self(mask)
    }

    pub const fn encode(create: bool, update: bool, filter: bool) -> Self {
        Self(bit(create, Self::CREATE) | bit(update, Self::UPDATE) | bit(filter, Self::FILTER))
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    pub const fn creatable(self) -> bool {
        self.0 & Self::CREATE != 0
    }

    pub const fn updatable(self) -> bool {
        self.0 & Self::UPDATE != 0
    }

    pub const fn filterable(self) -> bool {
        self.0 & Self::FILTER != 0
    }
}

/// Form and view visibility stored on a column (`display_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayFlags(i32);

impl DisplayFlags {
    /// Shown on the add form.
    pub const ADD: i32 = 1;
    /// Shown on the edit form.
    pub const EDIT: i32 = 2;
    /// Shown in list views.
    pub const LIST: i32 = 4;
    /// Shown in detail views.
    pub const DETAIL: i32 = 8;

    pub const fn new(mask: i32) -> Self {
        Self(mask)
    }

    pub const fn encode(add: bool, edit: bool, list: bool, detail: bool) -> Self {
        Self(
            bit(add, Self::ADD)
                | bit(edit, Self::EDIT)
                | bit(list, Self::LIST)
                | bit(detail, Self::DETAIL),
        )
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn on_add(self) -> bool {
        self.0 & Self::ADD != 0
    }

    pub const fn on_edit(self) -> bool {
        self.0 & Self::EDIT != 0
    }

    pub const fn on_list(self) -> bool {
        self.0 & Self::LIST != 0
    }

    pub const fn on_detail(self) -> bool {
        self.0 & Self::DETAIL != 0
    }
}

/// Page families generated for an application (`page_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageFlags(i32);

impl PageFlags {
    /// Desktop browser pages.
    pub const PC: i32 = 1;
    /// Mobile pages.
    pub const MOBILE: i32 = 2;
    /// Large-screen dashboard pages.
    pub const DASHBOARD: i32 = 4;

    pub const fn new(mask: i32) -> Self {
        Self(mask)
    }

    pub const fn bits(self) -> i32 {
        self.0
    }

    pub const fn pc(self) -> bool {
        self.0 & Self::PC != 0
    }

    pub const fn mobile(self) -> bool {
        self.0 & Self::MOBILE != 0
    }

    pub const fn dashboard(self) -> bool {
        self.0 & Self::DASHBOARD != 0
    }
}

const fn bit(set: bool, mask: i32) -> i32 {
    if set { mask } else { 0 }
}
