// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed endpoint parameters
//!
//! Small value types for the parameters the API accepts as free-form strings.
//! Each one renders to its wire form through `Display` and parses from the
//! same form through `FromStr`, which is what the dynamic call path relies on.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::error::{EndpointError, EndpointResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw argument, mapping failures to [`EndpointError::InvalidArgument`]
pub fn parse_arg<T>(name: &str, raw: &str) -> EndpointResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| EndpointError::invalid(name, e))
}

/// Parse a comma separated list, rejecting an empty one
pub fn parse_list<T>(name: &str, raw: &str) -> EndpointResult<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_arg(name, item))
        .collect::<EndpointResult<Vec<T>>>()?;

    if items.is_empty() {
        return Err(EndpointError::empty_list(name));
    }
    Ok(items)
}

/// Parse a JSON-RPC quantity given as `0x` hex or as a decimal integer
pub fn parse_quantity<T>(name: &str, raw: &str) -> EndpointResult<T>
where
    T: TryFrom<u128>,
{
    let raw = raw.trim();
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => raw.parse::<u128>(),
    }
    .map_err(|e| EndpointError::invalid(name, e))?;

    T::try_from(parsed)
        .map_err(|_| EndpointError::invalid(name, format!("quantity `{raw}` is out of range")))
}

/// Ordering of list results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Oldest first
    #[default]
    Asc,
    /// Newest first
    Desc,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("expected `asc` or `desc`, got `{other}`")),
        }
    }
}

/// Which side of a timestamp to resolve a block number to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Closest {
    Before,
    After,
}

impl fmt::Display for Closest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

impl FromStr for Closest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(format!("expected `before` or `after`, got `{other}`")),
        }
    }
}

/// Execution client reported by the node statistics endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ClientType {
    #[default]
    Geth,
    Parity,
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geth => write!(f, "geth"),
            Self::Parity => write!(f, "parity"),
        }
    }
}

impl FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "geth" => Ok(Self::Geth),
            "parity" => Ok(Self::Parity),
            other => Err(format!("expected `geth` or `parity`, got `{other}`")),
        }
    }
}

/// Node synchronisation mode reported by the node statistics endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SyncMode {
    #[default]
    Default,
    Archive,
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Archive => write!(f, "archive"),
        }
    }
}

impl FromStr for SyncMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "archive" => Ok(Self::Archive),
            other => Err(format!("expected `default` or `archive`, got `{other}`")),
        }
    }
}

/// Block selector for the proxy (JSON-RPC) endpoints
///
/// Block numbers are rendered as `0x`-prefixed hex, as JSON-RPC expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlockTag {
    /// Most recent block
    #[default]
    Latest,
    /// Genesis block
    Earliest,
    /// Pending state
    Pending,
    /// A specific block height
    Number(u64),
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Earliest => write!(f, "earliest"),
            Self::Pending => write!(f, "pending"),
            Self::Number(number) => write!(f, "{number:#x}"),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl FromStr for BlockTag {
    type Err = String;

    /// Accepts the named tags, `0x` hex heights and decimal heights
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            _ => {
                let parsed = match lower.strip_prefix("0x") {
                    Some(hex) => u64::from_str_radix(hex, 16),
                    None => lower.parse::<u64>(),
                };
                parsed.map(Self::Number).map_err(|_| {
                    format!("expected `latest`, `earliest`, `pending` or a block number, got `{s}`")
                })
            }
        }
    }
}

/// Inclusive block interval for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockRange {
    start: u64,
    end: u64,
}

impl BlockRange {
    /// Create a range, rejecting an end block lower than the start block
    pub fn new(start: u64, end: u64) -> EndpointResult<Self> {
        if end < start {
            return Err(EndpointError::invalid(
                "endblock",
                format!("end block {end} is lower than start block {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// First block of the range
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last block of the range
    pub const fn end(&self) -> u64 {
        self.end
    }
}

/// Page selection for paginated list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pagination {
    page: u32,
    offset: u32,
}

impl Pagination {
    /// Create a page selection; both values are 1-based and must be non-zero
    pub fn new(page: u32, offset: u32) -> EndpointResult<Self> {
        if page == 0 {
            return Err(EndpointError::invalid("page", "must be at least 1"));
        }
        if offset == 0 {
            return Err(EndpointError::invalid("offset", "must be at least 1"));
        }
        Ok(Self { page, offset })
    }

    /// Page number
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of records per page
    pub const fn offset(&self) -> u32 {
        self.offset
    }
}

/// Inclusive calendar-day interval for the daily statistics endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting an end date before the start date
    pub fn new(start: NaiveDate, end: NaiveDate) -> EndpointResult<Self> {
        if end < start {
            return Err(EndpointError::invalid(
                "end_date",
                format!("end date {end} is before start date {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> EndpointResult<Self> {
        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;
        Self::new(start, end)
    }

    /// First day, formatted for the wire
    pub fn start(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// Last day, formatted for the wire
    pub fn end(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

fn parse_date(name: &str, raw: &str) -> EndpointResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| EndpointError::invalid(name, format!("expected YYYY-MM-DD: {e}")))
}
