use chrono::{TimeZone, Utc};

use lottery_report_lambda_rust::draw::beijing_time;
use lottery_report_lambda_rust::prompt::build_prompt;

#[test]
fn prompt_is_deterministic() {
    let at = beijing_time(Utc.with_ymd_and_hms(2025, 9, 23, 1, 0, 0).unwrap());
    let a = build_prompt("双色球必中", at);
    let b = build_prompt("双色球必中", at);
    assert_eq!(a, b);
}

#[test]
fn prompt_embeds_command_format_and_local_timestamp() {
    let at = beijing_time(Utc.with_ymd_and_hms(2025, 9, 23, 1, 5, 0).unwrap());
    let prompt = build_prompt("大乐透必中", at);
    assert!(prompt.contains("请执行指令：“大乐透必中”"), "prompt was: {}", prompt);
    assert!(prompt.contains("[单注 -> 双注 -> 五注 -> 复式]"), "prompt was: {}", prompt);
    assert!(prompt.contains("Markdown"), "prompt was: {}", prompt);
    assert!(
        prompt.contains("“祝您今天好运！(报告生成时间：2025-09-23 09:05)”"),
        "prompt was: {}",
        prompt
    );
}

#[test]
fn prompt_changes_with_timestamp() {
    let first = beijing_time(Utc.with_ymd_and_hms(2025, 9, 23, 1, 0, 0).unwrap());
    let later = beijing_time(Utc.with_ymd_and_hms(2025, 9, 23, 1, 1, 0).unwrap());
    assert_ne!(build_prompt("双色球必中", first), build_prompt("双色球必中", later));
}
