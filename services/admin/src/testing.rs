//! In-memory backend mock and fixtures for the admin controller tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{TimeZone, Utc};

use common::error::{ClientError, ClientResult};
use common::models::{
    ADMIN_USER_ID, BestSeller, BlindBox, BoxDraft, BoxItem, NewPost, Order, OrderStatus, Post,
    User,
};
use common::session::{AdminCredential, SessionContext};
use common::storage::MemoryStore;
use gateway::{Reveal, StorefrontBackend};

/// Scripted backend state: fixtures to serve, failure switches, and a
/// record of every privileged call made
#[derive(Default)]
pub struct MockState {
    pub orders: Vec<Order>,
    pub users: Vec<User>,
    pub boxes: Vec<BlindBox>,

    pub fail_orders: bool,
    pub fail_update_status: bool,
    pub fail_create_box: bool,
    pub fail_update_box: bool,
    pub fail_delete_box: bool,
    pub fail_delete_user: bool,

    pub all_orders_calls: Vec<Option<OrderStatus>>,
    pub update_status_calls: Vec<(i64, OrderStatus)>,
    pub delete_order_calls: Vec<i64>,
    pub create_box_calls: Vec<BoxDraft>,
    pub update_box_calls: Vec<(i64, BoxDraft)>,
    pub delete_box_calls: Vec<i64>,
    pub all_users_calls: usize,
    pub delete_user_calls: Vec<String>,
    pub list_box_calls: usize,
}

/// Cloneable handle over shared [`MockState`]
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect or script the shared state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }
}

fn fail(what: &str) -> ClientError {
    ClientError::Backend(format!("mock {what} failure"))
}

impl StorefrontBackend for MockBackend {
    async fn list_boxes(&self) -> ClientResult<Vec<BlindBox>> {
        let mut state = self.lock();
        state.list_box_calls += 1;
        Ok(state.boxes.clone())
    }

    async fn box_detail(&self, box_id: i64) -> ClientResult<BlindBox> {
        self.lock()
            .boxes
            .iter()
            .find(|b| b.id == box_id)
            .cloned()
            .ok_or_else(|| fail("detail"))
    }

    async fn purchase(&self, _user_id: i64, _box_id: i64) -> ClientResult<i64> {
        Ok(1)
    }

    async fn reveal(&self, _order_id: i64) -> ClientResult<Reveal> {
        Err(fail("reveal"))
    }

    async fn best_sellers(&self) -> ClientResult<Vec<BestSeller>> {
        Ok(Vec::new())
    }

    async fn orders_for_user(&self, _user_id: i64) -> ClientResult<Vec<Order>> {
        Ok(Vec::new())
    }

    async fn all_orders(
        &self,
        _credential: &AdminCredential,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Order>> {
        let mut state = self.lock();
        state.all_orders_calls.push(status);
        if state.fail_orders {
            return Err(fail("orders"));
        }
        let orders = state.orders.clone();
        Ok(match status {
            Some(wanted) => orders.into_iter().filter(|o| o.status == wanted).collect(),
            None => orders,
        })
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        let mut state = self.lock();
        state.update_status_calls.push((order_id, status));
        if state.fail_update_status {
            return Err(fail("status update"));
        }
        if let Some(order) = state.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
        Ok(())
    }

    async fn delete_order(&self, order_id: i64) -> ClientResult<()> {
        let mut state = self.lock();
        state.delete_order_calls.push(order_id);
        let before = state.orders.len();
        state.orders.retain(|o| o.id != order_id);
        if state.orders.len() == before {
            return Err(fail("order delete"));
        }
        Ok(())
    }

    async fn register(&self, _username: &str, _password: &str, _avatar: &str) -> ClientResult<()> {
        Ok(())
    }

    async fn login(&self, _username: &str, _password: &str) -> ClientResult<User> {
        Err(fail("login"))
    }

    async fn user_info(&self, uid: &str) -> ClientResult<User> {
        self.lock()
            .users
            .iter()
            .find(|user| user.username == uid)
            .cloned()
            .ok_or_else(|| fail("user info"))
    }

    async fn all_users(&self, _credential: &AdminCredential) -> ClientResult<Vec<User>> {
        let mut state = self.lock();
        state.all_users_calls += 1;
        Ok(state.users.clone())
    }

    async fn delete_user(&self, _credential: &AdminCredential, username: &str) -> ClientResult<()> {
        let mut state = self.lock();
        state.delete_user_calls.push(username.to_string());
        if state.fail_delete_user {
            return Err(fail("user delete"));
        }
        state.users.retain(|user| user.username != username);
        Ok(())
    }

    async fn create_box(&self, _credential: &AdminCredential, draft: &BoxDraft) -> ClientResult<()> {
        let mut state = self.lock();
        state.create_box_calls.push(draft.clone());
        if state.fail_create_box {
            return Err(fail("box create"));
        }
        let id = state.boxes.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let created = materialize(id, draft);
        state.boxes.push(created);
        Ok(())
    }

    async fn update_box(
        &self,
        _credential: &AdminCredential,
        box_id: i64,
        draft: &BoxDraft,
    ) -> ClientResult<()> {
        let mut state = self.lock();
        state.update_box_calls.push((box_id, draft.clone()));
        if state.fail_update_box {
            return Err(fail("box update"));
        }
        if let Some(existing) = state.boxes.iter_mut().find(|b| b.id == box_id) {
            *existing = materialize(box_id, draft);
        }
        Ok(())
    }

    async fn delete_box(&self, _credential: &AdminCredential, box_id: i64) -> ClientResult<()> {
        let mut state = self.lock();
        state.delete_box_calls.push(box_id);
        if state.fail_delete_box {
            return Err(fail("box delete"));
        }
        state.boxes.retain(|b| b.id != box_id);
        Ok(())
    }

    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        Ok(Vec::new())
    }

    async fn create_post(&self, _new_post: &NewPost) -> ClientResult<()> {
        Ok(())
    }

    async fn like_post(&self, _post_id: i64, _user_id: i64) -> ClientResult<()> {
        Ok(())
    }

    async fn posts_for_user(&self, _user_id: i64) -> ClientResult<Vec<Post>> {
        Ok(Vec::new())
    }

    async fn delete_post(&self, _post_id: i64) -> ClientResult<()> {
        Ok(())
    }
}

fn materialize(id: i64, draft: &BoxDraft) -> BlindBox {
    BlindBox {
        id,
        name: draft.name.clone(),
        price: draft.price,
        image_url: draft.image_url.clone(),
        stock: draft.stock,
        description: draft.description.clone(),
        items: draft
            .items
            .iter()
            .map(|item| BoxItem {
                id: None,
                name: item.name.clone(),
                description: item.description.clone(),
                image_url: item.image_url.clone(),
                quantity: item.quantity,
            })
            .collect(),
    }
}

/// Mint a real credential by establishing an admin session in memory
pub fn admin_credential() -> AdminCredential {
    let mut session = SessionContext::open(MemoryStore::new()).unwrap();
    session
        .establish(sample_user(ADMIN_USER_ID, "root"))
        .unwrap();
    session.admin_credential().unwrap()
}

pub fn sample_user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        avatar: "/avatars/sea.jpg".to_string(),
        created_at: None,
    }
}

pub fn sample_box(id: i64, name: &str, stock: i64) -> BlindBox {
    BlindBox {
        id,
        name: name.to_string(),
        price: 25.0,
        image_url: format!("/goods/{id}.jpg"),
        stock,
        description: String::new(),
        items: Vec::new(),
    }
}

pub fn sample_order(id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        user: sample_user(3, "alice"),
        blind_box: sample_box(1, "Pass 19.0", 99),
        item: BoxItem {
            id: Some(7),
            name: "common card".to_string(),
            description: String::new(),
            image_url: String::new(),
            quantity: 9,
        },
        purchase_time: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        status,
    }
}

pub fn sample_draft(name: &str) -> BoxDraft {
    BoxDraft {
        name: name.to_string(),
        price: 25.0,
        image_url: "/goods/new.jpg".to_string(),
        stock: 50,
        description: "a fresh series".to_string(),
        items: vec![common::models::ItemDraft {
            name: "common card".to_string(),
            description: "the usual pull".to_string(),
            image_url: "/items/common.jpg".to_string(),
            quantity: 9,
        }],
    }
}
