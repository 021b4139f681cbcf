use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use talent_track::store::MemoryStore;
use talent_track::workflows::applications::ApplicationService;
use talent_track::workflows::complaints::ComplaintService;
use talent_track::workflows::dashboard::DashboardService;
use talent_track::workflows::directory::AccountService;
use talent_track::workflows::jobs::JobService;
use talent_track::workflows::moderation::ModerationService;
use talent_track::workflows::network::NetworkService;
use talent_track::workflows::notifications::NotificationService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The full set of workflow services, all wired to one shared store.
pub(crate) struct Services {
    pub(crate) accounts: Arc<AccountService>,
    pub(crate) jobs: Arc<JobService>,
    pub(crate) applications: Arc<ApplicationService>,
    pub(crate) network: Arc<NetworkService>,
    pub(crate) notifications: Arc<NotificationService>,
    pub(crate) complaints: Arc<ComplaintService>,
    pub(crate) moderation: Arc<ModerationService>,
    pub(crate) dashboard: Arc<DashboardService>,
}

pub(crate) fn build_services(store: Arc<MemoryStore>) -> Services {
    let notifications = Arc::new(NotificationService::new(store.clone()));

    Services {
        accounts: Arc::new(AccountService::new(store.clone(), store.clone())),
        jobs: Arc::new(JobService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        applications: Arc::new(ApplicationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            notifications.clone(),
        )),
        network: Arc::new(NetworkService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            notifications.clone(),
        )),
        complaints: Arc::new(ComplaintService::new(store.clone())),
        moderation: Arc::new(ModerationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )),
        dashboard: Arc::new(DashboardService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )),
        notifications,
    }
}
