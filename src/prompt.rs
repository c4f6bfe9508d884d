use chrono::DateTime;
use chrono_tz::Tz;

/// Format used for the generation timestamp in the closing line of the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Build the report prompt for a lottery command, stamped with `generated_at`.
/// Pure template substitution: identical inputs give an identical prompt.
pub fn build_prompt(command: &str, generated_at: DateTime<Tz>) -> String {
    let stamp = generated_at.format(TIMESTAMP_FORMAT);
    format!(
        "你现在是资深数据分析师。请执行指令：“{command}”。\n\
         要求：\n\
         1. 基于28模型混合智能策略。\n\
         2. 严格按照 [单注 -> 双注 -> 五注 -> 复式] 的格式输出。\n\
         3. 输出 Markdown 格式。\n\
         4. 并在最后加上一句：“祝您今天好运！(报告生成时间：{stamp})”\n"
    )
}
