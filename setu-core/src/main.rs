use setu_core::{Assistant, CoreConfig, SessionManager, WorkforceStore, init_logger, stats};
use shared::models::{AttendanceMark, GrievanceCreate, GrievancePriority, UserRole};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载配置 + 日志
    let config = CoreConfig::from_env();
    init_logger(&config.log_level);

    tracing::info!("NagarSetu workforce core demo starting...");

    // 2. Restore a cached session, or sign in as the demo employee
    let mut session = SessionManager::restore(&config.session_dir);
    if !session.is_authenticated() {
        let response = session
            .login("rajesh.kumar@nagarsetu.gov.in", "demo1234", UserRole::Employee)
            .await;
        if !response.success {
            return Err(response.error.unwrap_or_else(|| "login failed".to_string()).into());
        }
    }
    let Some(user) = session.current_user().cloned() else {
        return Err("no active session".into());
    };
    println!("Signed in as {} ({})", user.name, user.designation);

    // 3. Seeded store + a subscription, the way a dashboard shell holds them
    let mut store = WorkforceStore::new();
    let mut events = store.subscribe();

    store.mark_attendance(&user.id, AttendanceMark::Present);
    store.add_grievance(GrievanceCreate {
        user_id: user.id.clone(),
        category: "Infrastructure".to_string(),
        subject: "Street light out on Ward 12 main road".to_string(),
        description: "The light opposite the community hall has been out for three nights."
            .to_string(),
        priority: GrievancePriority::Medium,
    });

    while let Ok(event) = events.try_recv() {
        println!("store event: {} {} ({})", event.resource, event.action, event.id);
    }

    // 4. Derived views over the current snapshot
    let overview = stats::workforce_overview(
        store.department_stats(),
        store.vacancies(),
        store.grievances(),
    );
    println!(
        "Workforce: {} employees, {}% attendance today, {}% of sanctioned posts filled",
        overview.total_employees, overview.attendance_rate, overview.fill_rate
    );

    let monthly = stats::monthly_attendance(store.attendance(), &user.id, &shared::util::today_date());
    println!(
        "This month: {}/{} work days present, {} grievances pending, {} unread notifications",
        monthly.present_days,
        monthly.total_work_days,
        overview.pending_grievances,
        store.unread_count()
    );

    // 5. One assistant round trip
    println!("\nAssistant: {}", Assistant::GREETING);
    println!("\nYou: when is my salary credited?");
    println!("\nAssistant: {}", Assistant::respond("when is my salary credited?"));

    session.logout();
    tracing::info!("Demo finished");
    Ok(())
}
