//! Chat assistant - canned-response helper
//!
//! Stateless keyword matcher over an ordered rule table; the first rule with
//! any keyword hit wins, unmatched input gets the help menu. `respond` is a
//! pure function. [`Assistant::respond_with_typing`] adds the simulated
//! typing delay and takes a cancellation token tied to the chat window's
//! lifetime, so a fired timer never delivers a reply after the window is
//! gone.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Simulated typing delay before an answer is produced
const TYPING_DELAY: Duration = Duration::from_millis(800);

/// One keyword rule: any hit selects the response
struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["attendance", "mark", "present"],
        response: ATTENDANCE_HELP,
    },
    Rule {
        keywords: &["grievance", "complaint", "issue"],
        response: GRIEVANCE_HELP,
    },
    Rule {
        keywords: &["payroll", "salary", "pay", "payslip"],
        response: PAYROLL_HELP,
    },
    Rule {
        keywords: &["leave", "holiday", "vacation"],
        response: LEAVE_HELP,
    },
    Rule {
        keywords: &["profile", "details", "info"],
        response: PROFILE_HELP,
    },
    Rule {
        keywords: &["password", "security"],
        response: PASSWORD_HELP,
    },
];

const ATTENDANCE_HELP: &str = "To mark your attendance:\n\n1. Go to the Dashboard or Attendance page\n2. Click the \"Mark Attendance\" button\n3. Your attendance will be recorded with the current timestamp\n\nYou can mark attendance once per day. Check your attendance history on the Attendance page.";

const GRIEVANCE_HELP: &str = "To raise a grievance:\n\n1. Navigate to Grievances page from the sidebar\n2. Click \"Raise New Grievance\"\n3. Select a category and fill in the details\n4. Submit your grievance\n\nYou can track your grievance status on the same page.";

const PAYROLL_HELP: &str = "Your payroll information is available on the Payroll page:\n\n• View monthly salary breakdown\n• Check allowances and deductions\n• Download payslips\n• View payment history\n\nSalaries are typically credited by the 28th of each month.";

const LEAVE_HELP: &str = "For leave applications:\n\n1. Go to the Attendance page\n2. Click \"Apply for Leave\"\n3. Select leave type and dates\n4. Submit for approval\n\nLeave balance and history are shown on the same page.";

const PROFILE_HELP: &str = "To view or update your profile:\n\n1. Click on your name in the top-right corner\n2. Select \"View Profile\"\n3. You can view your details and contact HR for updates";

const PASSWORD_HELP: &str = "To change your password:\n\n1. Go to Settings from the sidebar\n2. Navigate to Security section\n3. Click \"Change Password\"\n4. Enter current and new password";

const DEFAULT_HELP: &str = "I can help you with:\n\n• **Attendance** - Mark attendance, view history\n• **Grievances** - Raise and track complaints\n• **Payroll** - View salary, download payslips\n• **Leave** - Apply for leave\n• **Profile** - View your details\n\nJust ask me about any of these topics!";

/// Canned-response assistant
pub struct Assistant;

impl Assistant {
    /// Opening message shown when the chat window opens
    pub const GREETING: &'static str = "Hello! I'm NagarSetu Assistant. How can I help you today?\n\nAsk me about attendance, grievances, payroll, or any other topic!";

    /// Match `input` against the rule table, case-insensitively
    pub fn respond(input: &str) -> &'static str {
        let lower = input.to_lowercase();
        RULES
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
            .map(|rule| rule.response)
            .unwrap_or(DEFAULT_HELP)
    }

    /// Respond after the typing delay; `None` if `cancel` fires first
    /// (the chat window closed before the reply landed)
    pub async fn respond_with_typing(
        input: &str,
        cancel: &CancellationToken,
    ) -> Option<&'static str> {
        tokio::select! {
            _ = tokio::time::sleep(TYPING_DELAY) => Some(Self::respond(input)),
            _ = cancel.cancelled() => None,
        }
    }
}
