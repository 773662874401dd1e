use super::error::AppError;

/// Saving plans offered in the recommendation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Switch off lights and unplug idle devices
    Lite,
    /// Warmer air-con setpoint and peak-hour avoidance
    Balance,
    /// Cut water heater and dryer use entirely
    Max,
}

impl Plan {
    /// Identifier used in markup and parsing.
    pub fn id(&self) -> &'static str {
        match self {
            Plan::Lite => "lite",
            Plan::Balance => "balance",
            Plan::Max => "max",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Plan::Lite => "แผน Lite (เริ่มต้น)",
            Plan::Balance => "แผน Balance (แนะนำ)",
            Plan::Max => "แผน Max (ประหยัดสูงสุด)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Plan::Lite => "เน้นการปิดไฟและถอดปลั๊กเมื่อไม่ใช้งาน ไม่กระทบชีวิตประจำวันมากนัก",
            Plan::Balance => {
                "ปรับอุณหภูมิแอร์เป็น 26°C และหลีกเลี่ยงการใช้ไฟช่วง Peak (13:00-15:00)"
            }
            Plan::Max => {
                "งดใช้เครื่องทำน้ำอุ่น เครื่องอบผ้า และเปิดแอร์เฉพาะห้องนอนตอนกลางคืนเท่านั้น"
            }
        }
    }

    /// Estimated monthly saving, already formatted for display
    pub fn estimated_savings(&self) -> &'static str {
        match self {
            Plan::Lite => "50 - 80 บาท",
            Plan::Balance => "150 - 200 บาท",
            Plan::Max => "300+ บาท",
        }
    }

    pub fn all() -> &'static [Plan] {
        &[Plan::Lite, Plan::Balance, Plan::Max]
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Plan {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lite" => Ok(Plan::Lite),
            "balance" => Ok(Plan::Balance),
            "max" => Ok(Plan::Max),
            _ => Err(AppError::DataError(format!("Unknown plan: {s}"))),
        }
    }
}

/// Where the user is in the plan flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanStep {
    #[default]
    Start,
    Selection,
    Result(Plan),
}

impl PlanStep {
    /// "Show plans" from the start card
    pub fn show_list(self) -> Self {
        match self {
            PlanStep::Start => PlanStep::Selection,
            other => other,
        }
    }

    /// Picking a plan by identifier. Unknown identifiers leave the step unchanged.
    pub fn select(self, id: &str) -> Self {
        match id.parse::<Plan>() {
            Ok(plan) => PlanStep::Result(plan),
            Err(_) => self,
        }
    }

    pub fn shows_start(&self) -> bool {
        matches!(self, PlanStep::Start)
    }

    pub fn shows_list(&self) -> bool {
        !self.shows_start()
    }

    pub fn selected(&self) -> Option<Plan> {
        match self {
            PlanStep::Result(plan) => Some(*plan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_parsing() {
        assert_eq!("lite".parse::<Plan>().unwrap(), Plan::Lite);
        assert_eq!("Balance".parse::<Plan>().unwrap(), Plan::Balance);
        assert!("ultra".parse::<Plan>().is_err());
    }

    #[test]
    fn test_plan_ids_round_trip() {
        for plan in Plan::all() {
            assert_eq!(plan.id().parse::<Plan>().unwrap(), *plan);
        }
    }

    #[test]
    fn test_savings_lookup() {
        assert_eq!(Plan::Max.estimated_savings(), "300+ บาท");
        assert!(Plan::Balance.description().contains("26°C"));
    }

    #[test]
    fn test_step_flow() {
        let step = PlanStep::default();
        assert!(step.shows_start());

        let step = step.show_list();
        assert_eq!(step, PlanStep::Selection);
        assert!(step.selected().is_none());

        let step = step.select("balance");
        assert_eq!(step.selected(), Some(Plan::Balance));
        assert!(step.shows_list());

        // Unknown plan keeps the current result
        assert_eq!(step.select("bogus"), PlanStep::Result(Plan::Balance));
    }
}
