//! Pyth Price Accounts
//!
//! Decoder for the v2 price account layout published on Pythnet. Only the
//! header and the aggregate price block are read; publisher components are
//! skipped.
//!
//! ```text
//! offset  size  field
//!      0     4  magic (0xa1b2c3d4)
//!      4     4  version
//!      8     4  account type (3 = price)
//!     12     4  size
//!     16     4  price type
//!     20     4  exponent (i32)
//!     24   184  component counts, slots, EMA, product/next keys, previous price
//!    208    32  aggregate: price i64, conf u64, status u32, corp act u32, pub slot u64
//! ```

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{Result, ToolsError};

pub const MAGIC: u32 = 0xa1b2_c3d4;
pub const PRICE_ACCOUNT_TYPE: u32 = 3;

const HEADER_LEN: usize = 16;
const EXPONENT_OFFSET: usize = HEADER_LEN + 4;
const AGGREGATE_OFFSET: usize = HEADER_LEN + 192;
const PRICE_INFO_LEN: usize = 32;

/// A trading aggregate older than this many slots is reported as unknown
pub const MAX_SLOT_DIFFERENCE: u64 = 25;

/// Aggregate trading status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceStatus {
    Unknown,
    Trading,
    Halted,
    Auction,
    Ignored,
}

impl PriceStatus {
    pub fn from_code(code: u32) -> Result<Self> {
        Ok(match code {
            0 => Self::Unknown,
            1 => Self::Trading,
            2 => Self::Halted,
            3 => Self::Auction,
            4 => Self::Ignored,
            other => {
                return Err(ToolsError::AccountDecode(format!(
                    "{other} is not a valid price status"
                )))
            }
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Trading => "TRADING",
            Self::Halted => "HALTED",
            Self::Auction => "AUCTION",
            Self::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for PriceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw price block as stored on chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceInfo {
    pub raw_price: i64,
    pub raw_confidence: u64,
    pub status: PriceStatus,
    pub pub_slot: u64,
}

/// Decoded price account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceAccount {
    pub exponent: i32,

    /// `None` when the account data stops before the aggregate block
    pub aggregate: Option<PriceInfo>,

    /// Slot the RPC node answered at
    pub slot: u64,
}

impl PriceAccount {
    /// Decode raw account data fetched at `slot`
    pub fn decode(data: &[u8], slot: u64) -> Result<Self> {
        let magic = read_u32(data, 0)?;
        if magic != MAGIC {
            return Err(ToolsError::AccountDecode(format!(
                "wrong magic: expected {MAGIC:08x}, got {magic:08x}"
            )));
        }

        let account_type = read_u32(data, 8)?;
        if account_type != PRICE_ACCOUNT_TYPE {
            return Err(ToolsError::AccountDecode(format!(
                "expected price account (type {PRICE_ACCOUNT_TYPE}), got type {account_type}"
            )));
        }

        let exponent = read_i32(data, EXPONENT_OFFSET)?;

        let aggregate = if data.len() >= AGGREGATE_OFFSET + PRICE_INFO_LEN {
            Some(PriceInfo {
                raw_price: read_i64(data, AGGREGATE_OFFSET)?,
                raw_confidence: read_u64(data, AGGREGATE_OFFSET + 8)?,
                status: PriceStatus::from_code(read_u32(data, AGGREGATE_OFFSET + 16)?)?,
                pub_slot: read_u64(data, AGGREGATE_OFFSET + 24)?,
            })
        } else {
            None
        };

        Ok(Self {
            exponent,
            aggregate,
            slot,
        })
    }

    /// Aggregate status, demoting stale trading prices to `Unknown`
    pub fn aggregate_status(&self) -> Option<PriceStatus> {
        let info = self.aggregate.as_ref()?;
        if info.status == PriceStatus::Trading
            && self.slot.saturating_sub(info.pub_slot) > MAX_SLOT_DIFFERENCE
        {
            return Some(PriceStatus::Unknown);
        }
        Some(info.status)
    }

    pub fn aggregate_price(&self) -> Result<Decimal> {
        let info = self.aggregate_info()?;
        scale(i128::from(info.raw_price), self.exponent)
    }

    pub fn aggregate_confidence(&self) -> Result<Decimal> {
        let info = self.aggregate_info()?;
        scale(i128::from(info.raw_confidence), self.exponent)
    }

    fn aggregate_info(&self) -> Result<&PriceInfo> {
        self.aggregate
            .as_ref()
            .ok_or_else(|| ToolsError::AccountDecode("no aggregate price".into()))
    }
}

/// `raw * 10^exponent` without going through floating point
fn scale(raw: i128, exponent: i32) -> Result<Decimal> {
    let overflow = || ToolsError::AccountDecode(format!("{raw}e{exponent} out of range"));

    if exponent <= 0 {
        return Decimal::try_from_i128_with_scale(raw, exponent.unsigned_abs())
            .map_err(|_| overflow());
    }

    let base = Decimal::try_from_i128_with_scale(raw, 0).map_err(|_| overflow())?;
    (0..exponent)
        .try_fold(base, |acc, _| acc.checked_mul(Decimal::TEN))
        .ok_or_else(overflow)
}

fn field<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            ToolsError::AccountDecode(format!(
                "account data too short: need {} bytes, have {}",
                offset + N,
                data.len()
            ))
        })
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    field(data, offset).map(u32::from_le_bytes)
}

fn read_i32(data: &[u8], offset: usize) -> Result<i32> {
    field(data, offset).map(i32::from_le_bytes)
}

fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    field(data, offset).map(u64::from_le_bytes)
}

fn read_i64(data: &[u8], offset: usize) -> Result<i64> {
    field(data, offset).map(i64::from_le_bytes)
}

/// Build synthetic price account data for tests
#[cfg(test)]
pub(crate) fn encode_price_account(
    exponent: i32,
    raw_price: i64,
    raw_confidence: u64,
    status: u32,
    pub_slot: u64,
) -> Vec<u8> {
    let mut data = vec![0u8; AGGREGATE_OFFSET + PRICE_INFO_LEN + 96];
    data[0..4].copy_from_slice(&MAGIC.to_le_bytes());
    data[4..8].copy_from_slice(&2u32.to_le_bytes());
    data[8..12].copy_from_slice(&PRICE_ACCOUNT_TYPE.to_le_bytes());
    let len = u32::try_from(data.len()).unwrap();
    data[12..16].copy_from_slice(&len.to_le_bytes());
    data[EXPONENT_OFFSET..EXPONENT_OFFSET + 4].copy_from_slice(&exponent.to_le_bytes());

    let agg = AGGREGATE_OFFSET;
    data[agg..agg + 8].copy_from_slice(&raw_price.to_le_bytes());
    data[agg + 8..agg + 16].copy_from_slice(&raw_confidence.to_le_bytes());
    data[agg + 16..agg + 20].copy_from_slice(&status.to_le_bytes());
    data[agg + 24..agg + 32].copy_from_slice(&pub_slot.to_le_bytes());
    data
}
