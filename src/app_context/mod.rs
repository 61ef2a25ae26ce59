use crate::imagery::ImageryProvider;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage, IM: ImageryProvider> {
    pub sessions: SS,
    pub imagery: IM,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init<IM: ImageryProvider>(imagery: IM) -> AppContext<HashMapSessionsStorage, IM> {
    AppContext {
        sessions: HashMapSessionsStorage::default(),
        imagery,
    }
}
