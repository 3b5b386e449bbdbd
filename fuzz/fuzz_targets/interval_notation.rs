#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_core::{Domain, Interval, check_limits};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let probe = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let Ok(notation) = std::str::from_utf8(&data[8..]) else {
        return;
    };
    let Ok(interval) = notation.parse::<Interval>() else {
        return;
    };

    // A parsed interval renders back to notation that parses to the same interval.
    let rendered = interval.to_string();
    let reparsed: Interval = rendered.parse().expect("rendered interval must parse");
    assert_eq!(reparsed, interval);

    let table = [("x", interval)];
    let checked = check_limits(Domain::Support, &table, &[("x", probe)]);
    assert_eq!(checked.is_ok(), interval.contains(probe));
});
