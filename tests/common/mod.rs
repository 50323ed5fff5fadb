#![allow(dead_code)]

pub use dayplan_test_utils::builders;
pub use dayplan_test_utils::{init_tracing, with_timeout};

use dayplan::plan::Plan;

use crate::common::builders::PlanBuilder;

/// Two tasks (`2` and `1-3` hours) in a 9 am - 5 pm day.
pub fn two_task_day() -> Plan {
    PlanBuilder::new().task("2").task("1-3").day(9, 17).build()
}
