use crate::errors::AppError;
use std::str::FromStr;

/// One of the four positions of the entry form.
///
/// A slot addresses a column in both the `kilometers` and the `times` table,
/// but the two tables name their columns differently; see
/// [`Slot::km_column`] and [`Slot::time_column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Begin,
    Eerste,
    Laatste,
    Terug,
}

/// Odometer columns of the `kilometers` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmColumn {
    Begin,
    Eerste,
    Laatste,
    Terug,
}

/// Punch columns of the `times` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeColumn {
    Begin,
    CheckIn,
    CheckOut,
    Laatste,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Begin, Slot::Eerste, Slot::Laatste, Slot::Terug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Begin => "Begin",
            Slot::Eerste => "Eerste",
            Slot::Laatste => "Laatste",
            Slot::Terug => "Terug",
        }
    }

    /// Slot → odometer column (identity naming).
    pub fn km_column(&self) -> KmColumn {
        match self {
            Slot::Begin => KmColumn::Begin,
            Slot::Eerste => KmColumn::Eerste,
            Slot::Laatste => KmColumn::Laatste,
            Slot::Terug => KmColumn::Terug,
        }
    }

    /// Slot → punch column. Not the identity: `Laatste` is the check-out and
    /// `Terug` lands in the `laatste` column.
    pub fn time_column(&self) -> TimeColumn {
        match self {
            Slot::Begin => TimeColumn::Begin,
            Slot::Eerste => TimeColumn::CheckIn,
            Slot::Laatste => TimeColumn::CheckOut,
            Slot::Terug => TimeColumn::Laatste,
        }
    }
}

impl FromStr for Slot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Begin" => Ok(Slot::Begin),
            "Eerste" => Ok(Slot::Eerste),
            "Laatste" => Ok(Slot::Laatste),
            "Terug" => Ok(Slot::Terug),
            other => Err(AppError::UnknownField(other.to_string())),
        }
    }
}

impl KmColumn {
    /// Storage order of the odometer columns.
    pub const ALL: [KmColumn; 4] = [
        KmColumn::Begin,
        KmColumn::Eerste,
        KmColumn::Laatste,
        KmColumn::Terug,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            KmColumn::Begin => "begin",
            KmColumn::Eerste => "eerste",
            KmColumn::Laatste => "laatste",
            KmColumn::Terug => "terug",
        }
    }
}

impl TimeColumn {
    /// Storage order of the punch columns.
    pub const ALL: [TimeColumn; 4] = [
        TimeColumn::Begin,
        TimeColumn::CheckIn,
        TimeColumn::CheckOut,
        TimeColumn::Laatste,
    ];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimeColumn::Begin => "begin",
            TimeColumn::CheckIn => "check_in",
            TimeColumn::CheckOut => "check_out",
            TimeColumn::Laatste => "laatste",
        }
    }
}
