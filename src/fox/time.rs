use chrono::Timelike;

/// Packs a time of day the way the inverter firmware expects: hour in the
/// high byte, minute in the low byte.
pub fn encode(hour: u8, minute: u8) -> u16 {
    debug_assert!(hour < 24 && minute < 60, "invalid time {}:{}", hour, minute);
    u16::from(hour) * 256 + u16::from(minute)
}

/// Encodes a start/stop pair. Seconds are ignored.
pub fn encode_time<T: Timelike>(start: &T, stop: &T) -> (u16, u16) {
    // Timelike keeps hour < 24 and minute < 60
    (
        encode(start.hour() as u8, start.minute() as u8),
        encode(stop.hour() as u8, stop.minute() as u8),
    )
}
