use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

/// Fixed UTC+8 zone. `Etc/GMT-8` uses the POSIX sign convention, so it is eight hours ahead of UTC.
pub const BEIJING: Tz = chrono_tz::Etc::GMTMinus8;

/// The two draws the job alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lottery {
    /// 双色球, drawn Tuesday, Thursday and Sunday.
    DoubleColorBall,
    /// 大乐透, drawn Monday, Wednesday and Saturday.
    SuperLotto,
}

impl Lottery {
    /// Instruction handed to the model inside the prompt.
    pub fn command(self) -> &'static str {
        match self {
            Lottery::DoubleColorBall => "双色球必中",
            Lottery::SuperLotto => "大乐透必中",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Lottery::DoubleColorBall => "双色球",
            Lottery::SuperLotto => "大乐透",
        }
    }

    /// (command, display name) pair.
    pub fn task(self) -> (&'static str, &'static str) {
        (self.command(), self.display_name())
    }

    /// Title of the push notification carrying the report.
    pub fn report_title(self) -> String {
        format!("【{}】早9点裁决报告", self.display_name())
    }
}

/// Convert a UTC instant to the fixed UTC+8 wall clock.
pub fn beijing_time(now_utc: DateTime<Utc>) -> DateTime<Tz> {
    now_utc.with_timezone(&BEIJING)
}

/// Lottery drawn on the UTC+8 calendar day containing `now_utc`, or None on Friday.
pub fn draw_for(now_utc: DateTime<Utc>) -> Option<Lottery> {
    match beijing_time(now_utc).weekday().number_from_monday() {
        2 | 4 | 7 => Some(Lottery::DoubleColorBall),
        1 | 3 | 6 => Some(Lottery::SuperLotto),
        _ => None,
    }
}
