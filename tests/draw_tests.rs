use chrono::{Datelike, Duration, TimeZone, Utc};

use lottery_report_lambda_rust::draw::{beijing_time, draw_for, Lottery};

#[test]
fn tuesday_is_double_color_ball() {
    // 2025-09-23 09:00 in UTC+8
    let now = Utc.with_ymd_and_hms(2025, 9, 23, 1, 0, 0).unwrap();
    let lottery = draw_for(now).expect("Tuesday has a draw");
    assert_eq!(lottery.task(), ("双色球必中", "双色球"));
    assert_eq!(lottery.report_title(), "【双色球】早9点裁决报告");
}

#[test]
fn friday_has_no_draw() {
    let now = Utc.with_ymd_and_hms(2025, 9, 26, 1, 0, 0).unwrap();
    assert_eq!(draw_for(now), None);
}

#[test]
fn full_week_mapping() {
    // Monday 2025-09-22 through Sunday 2025-09-28, 09:00 UTC+8
    let monday = Utc.with_ymd_and_hms(2025, 9, 22, 1, 0, 0).unwrap();
    let expected = [
        Some(Lottery::SuperLotto),      // Mon
        Some(Lottery::DoubleColorBall), // Tue
        Some(Lottery::SuperLotto),      // Wed
        Some(Lottery::DoubleColorBall), // Thu
        None,                           // Fri
        Some(Lottery::SuperLotto),      // Sat
        Some(Lottery::DoubleColorBall), // Sun
    ];
    for (offset, want) in expected.iter().enumerate() {
        let now = monday + Duration::days(offset as i64);
        assert_eq!(draw_for(now), *want, "day offset {}", offset);
    }
}

#[test]
fn weekday_is_taken_in_utc_plus_8() {
    // Thursday 16:00 UTC is already Friday 00:00 in UTC+8
    let thursday_utc = Utc.with_ymd_and_hms(2025, 9, 25, 16, 0, 0).unwrap();
    assert_eq!(draw_for(thursday_utc), None);
    // Thursday 15:59 UTC is still Thursday in UTC+8
    let still_thursday = Utc.with_ymd_and_hms(2025, 9, 25, 15, 59, 0).unwrap();
    assert_eq!(draw_for(still_thursday), Some(Lottery::DoubleColorBall));
}

#[test]
fn mapping_holds_over_a_year_of_hours() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for h in (0..366 * 24).step_by(5) {
        let now = start + Duration::hours(h);
        let weekday = beijing_time(now).weekday().number_from_monday();
        let got = draw_for(now);
        match weekday {
            2 | 4 | 7 => assert_eq!(got, Some(Lottery::DoubleColorBall), "{}", now),
            1 | 3 | 6 => assert_eq!(got, Some(Lottery::SuperLotto), "{}", now),
            _ => assert_eq!(got, None, "{}", now),
        }
        // Same input, same answer
        assert_eq!(draw_for(now), got);
    }
}

#[test]
fn beijing_time_is_eight_hours_ahead() {
    let now = Utc.with_ymd_and_hms(2025, 12, 31, 20, 30, 0).unwrap();
    let local = beijing_time(now);
    assert_eq!(local.format("%Y-%m-%d %H:%M").to_string(), "2026-01-01 04:30");
}

#[test]
fn super_lotto_names() {
    assert_eq!(Lottery::SuperLotto.task(), ("大乐透必中", "大乐透"));
    assert_eq!(Lottery::SuperLotto.report_title(), "【大乐透】早9点裁决报告");
}
