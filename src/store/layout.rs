//! On-disk record layout
//!
//! Every team occupies one fixed-size record, stored at `index * RECORD_SIZE`
//! where `index = team_id - 1`. All integers are big-endian:
//!
//! | offset | size | field       |
//! |--------|------|-------------|
//! | 0      | 4    | team ID     |
//! | 4      | 8    | wins        |
//! | 12     | 8    | losses      |
//! | 20     | 8    | OT losses   |
//!
//! These constants are shared by the store and the seeding path so both agree
//! on the file format.

use crate::types::{StandingsError, TeamId, TeamRecord, TEAM_COUNT};

/// Width of the team ID field
pub const TEAM_ID_SIZE: usize = std::mem::size_of::<i32>();

/// Width of each counter field
pub const COUNTER_SIZE: usize = std::mem::size_of::<i64>();

/// Width of one record
pub const RECORD_SIZE: usize = TEAM_ID_SIZE + 3 * COUNTER_SIZE;

/// Size of a fully seeded store
pub const STORE_SIZE: u64 = (TEAM_COUNT * RECORD_SIZE) as u64;

/// Byte offset of the record at `index`
pub fn record_offset(index: usize) -> u64 {
    (index * RECORD_SIZE) as u64
}

/// Encode a record into its on-disk form
///
/// # Errors
///
/// Returns `CounterOverflow` if a counter does not fit a signed 64-bit field,
/// or `OutOfRange` if the team ID does not fit a signed 32-bit field.
pub fn encode_record(record: &TeamRecord) -> Result<[u8; RECORD_SIZE], StandingsError> {
    let team_id = i32::try_from(record.team_id)
        .map_err(|_| StandingsError::out_of_range(record.team_id))?;

    let mut buf = [0u8; RECORD_SIZE];
    buf[..TEAM_ID_SIZE].copy_from_slice(&team_id.to_be_bytes());

    let counters = [record.wins, record.losses, record.losses_ot];
    for (slot, value) in buf[TEAM_ID_SIZE..]
        .chunks_exact_mut(COUNTER_SIZE)
        .zip(counters)
    {
        let value = i64::try_from(value)
            .map_err(|_| StandingsError::counter_overflow(record.team_id))?;
        slot.copy_from_slice(&value.to_be_bytes());
    }

    Ok(buf)
}

/// Decode the record stored at `index`
///
/// # Errors
///
/// Returns `CorruptData` if the stored team ID is not `index + 1` or a
/// counter is negative.
pub fn decode_record(index: usize, buf: &[u8; RECORD_SIZE]) -> Result<TeamRecord, StandingsError> {
    let mut team_id = [0u8; TEAM_ID_SIZE];
    team_id.copy_from_slice(&buf[..TEAM_ID_SIZE]);
    let team_id = i32::from_be_bytes(team_id);

    let expected = index + 1;
    let team_id = TeamId::try_from(team_id)
        .ok()
        .filter(|&id| id as usize == expected)
        .ok_or_else(|| {
            StandingsError::corrupt(index, format!("expected team {expected}, found {team_id}"))
        })?;

    let mut counters = [0u64; 3];
    for (counter, chunk) in counters
        .iter_mut()
        .zip(buf[TEAM_ID_SIZE..].chunks_exact(COUNTER_SIZE))
    {
        let mut raw = [0u8; COUNTER_SIZE];
        raw.copy_from_slice(chunk);
        let value = i64::from_be_bytes(raw);
        *counter = u64::try_from(value)
            .map_err(|_| StandingsError::corrupt(index, format!("negative counter {value}")))?;
    }

    let [wins, losses, losses_ot] = counters;
    Ok(TeamRecord {
        team_id,
        wins,
        losses,
        losses_ot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_COUNTER;

    #[test]
    fn test_layout_constants() {
        assert_eq!(TEAM_ID_SIZE, 4);
        assert_eq!(COUNTER_SIZE, 8);
        assert_eq!(RECORD_SIZE, 28);
        assert_eq!(STORE_SIZE, 840);
        assert_eq!(record_offset(0), 0);
        assert_eq!(record_offset(29), 812);
    }

    #[test]
    fn test_encode_is_big_endian() {
        let record = TeamRecord {
            team_id: 3,
            wins: 1,
            losses: 0x0102,
            losses_ot: 0,
        };
        let buf = encode_record(&record).unwrap();

        assert_eq!(&buf[..4], &[0, 0, 0, 3]);
        assert_eq!(&buf[4..12], &[0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(&buf[12..20], &[0, 0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(&buf[20..28], &[0; 8]);
    }

    #[test]
    fn test_decode_reads_encoded_record() {
        let record = TeamRecord {
            team_id: 30,
            wins: 41,
            losses: 29,
            losses_ot: MAX_COUNTER,
        };
        let buf = encode_record(&record).unwrap();
        assert_eq!(decode_record(29, &buf).unwrap(), record);
    }

    #[test]
    fn test_decode_rejects_mismatched_team() {
        let buf = encode_record(&TeamRecord::new(7)).unwrap();
        let error = decode_record(2, &buf).unwrap_err();
        assert_eq!(
            error,
            StandingsError::corrupt(2, "expected team 3, found 7")
        );
    }

    #[test]
    fn test_decode_rejects_negative_counter() {
        let mut buf = encode_record(&TeamRecord::new(1)).unwrap();
        buf[4..12].copy_from_slice(&(-1i64).to_be_bytes());
        assert!(matches!(
            decode_record(0, &buf),
            Err(StandingsError::CorruptData { index: 0, .. })
        ));
    }

    #[test]
    fn test_encode_rejects_oversized_counter() {
        let record = TeamRecord {
            team_id: 1,
            wins: u64::MAX,
            losses: 0,
            losses_ot: 0,
        };
        assert_eq!(
            encode_record(&record),
            Err(StandingsError::counter_overflow(1))
        );
    }
}
