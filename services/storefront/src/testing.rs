//! In-memory backend mock and model fixtures shared by the controller tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{TimeZone, Utc};

use common::error::{ClientError, ClientResult};
use common::models::{
    BestSeller, BlindBox, BoxDraft, BoxItem, NewPost, Order, OrderStatus, Post, PostAuthor, User,
};
use common::session::AdminCredential;
use gateway::{Reveal, StorefrontBackend};

/// Scripted backend state: fixtures to serve, failure switches, and a
/// record of every call made
#[derive(Default)]
pub struct MockState {
    pub boxes: Vec<BlindBox>,
    pub best: Vec<BestSeller>,
    pub posts: Vec<Post>,
    pub user_posts: Vec<Post>,
    pub orders: Vec<Order>,
    pub login_user: Option<User>,
    pub reveal: Option<Reveal>,
    pub next_order_id: i64,

    pub fail_list: bool,
    pub fail_best: bool,
    pub fail_purchase: bool,
    pub fail_reveal: bool,
    pub fail_register: bool,
    pub fail_login: bool,
    pub fail_like: bool,
    pub fail_create_post: bool,
    pub fail_update_status: bool,

    pub list_calls: usize,
    pub best_calls: usize,
    pub detail_calls: Vec<i64>,
    pub purchase_calls: Vec<(i64, i64)>,
    pub reveal_calls: Vec<i64>,
    pub register_calls: Vec<(String, String, String)>,
    pub login_calls: Vec<(String, String)>,
    pub user_info_calls: Vec<String>,
    pub update_status_calls: Vec<(i64, OrderStatus)>,
    pub delete_order_calls: Vec<i64>,
    pub create_post_calls: Vec<NewPost>,
    pub like_calls: Vec<(i64, i64)>,
    pub delete_post_calls: Vec<i64>,
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
        state.list_calls += 1;
        if state.fail_list {
            return Err(fail("list"));
        }
        Ok(state.boxes.clone())
    }

    async fn box_detail(&self, box_id: i64) -> ClientResult<BlindBox> {
        let mut state = self.lock();
        state.detail_calls.push(box_id);
        state
            .boxes
            .iter()
            .find(|b| b.id == box_id)
            .cloned()
            .ok_or_else(|| fail("detail"))
    }

    async fn purchase(&self, user_id: i64, box_id: i64) -> ClientResult<i64> {
        let mut state = self.lock();
        state.purchase_calls.push((user_id, box_id));
        if state.fail_purchase {
            return Err(fail("purchase"));
        }
        Ok(state.next_order_id)
    }

    async fn reveal(&self, order_id: i64) -> ClientResult<Reveal> {
        let mut state = self.lock();
        state.reveal_calls.push(order_id);
        if state.fail_reveal {
            return Err(fail("reveal"));
        }
        Ok(state.reveal.clone().unwrap_or_else(sample_reveal))
    }

    async fn best_sellers(&self) -> ClientResult<Vec<BestSeller>> {
        let mut state = self.lock();
        state.best_calls += 1;
        if state.fail_best {
            return Err(fail("best sellers"));
        }
        Ok(state.best.clone())
    }

    async fn orders_for_user(&self, _user_id: i64) -> ClientResult<Vec<Order>> {
        Ok(self.lock().orders.clone())
    }

    async fn all_orders(
        &self,
        _credential: &AdminCredential,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Order>> {
        let orders = self.lock().orders.clone();
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

    async fn register(&self, username: &str, password: &str, avatar: &str) -> ClientResult<()> {
        let mut state = self.lock();
        state
            .register_calls
            .push((username.to_string(), password.to_string(), avatar.to_string()));
        if state.fail_register {
            return Err(fail("register"));
        }
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        let mut state = self.lock();
        state
            .login_calls
            .push((username.to_string(), password.to_string()));
        if state.fail_login {
            return Err(fail("login"));
        }
        state.login_user.clone().ok_or_else(|| fail("login"))
    }

    async fn user_info(&self, uid: &str) -> ClientResult<User> {
        let mut state = self.lock();
        state.user_info_calls.push(uid.to_string());
        state
            .login_user
            .clone()
            .filter(|user| user.username == uid)
            .ok_or_else(|| fail("user info"))
    }

    async fn all_users(&self, _credential: &AdminCredential) -> ClientResult<Vec<User>> {
        Ok(Vec::new())
    }

    async fn delete_user(&self, _credential: &AdminCredential, _username: &str) -> ClientResult<()> {
        Ok(())
    }

    async fn create_box(&self, _credential: &AdminCredential, _draft: &BoxDraft) -> ClientResult<()> {
        Ok(())
    }

    async fn update_box(
        &self,
        _credential: &AdminCredential,
        _box_id: i64,
        _draft: &BoxDraft,
    ) -> ClientResult<()> {
        Ok(())
    }

    async fn delete_box(&self, _credential: &AdminCredential, _box_id: i64) -> ClientResult<()> {
        Ok(())
    }

    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        Ok(self.lock().posts.clone())
    }

    async fn create_post(&self, new_post: &NewPost) -> ClientResult<()> {
        let mut state = self.lock();
        state.create_post_calls.push(new_post.clone());
        if state.fail_create_post {
            return Err(fail("post"));
        }
        Ok(())
    }

    async fn like_post(&self, post_id: i64, user_id: i64) -> ClientResult<()> {
        let mut state = self.lock();
        state.like_calls.push((post_id, user_id));
        if state.fail_like {
            return Err(fail("like"));
        }
        Ok(())
    }

    async fn posts_for_user(&self, _user_id: i64) -> ClientResult<Vec<Post>> {
        Ok(self.lock().user_posts.clone())
    }

    async fn delete_post(&self, post_id: i64) -> ClientResult<()> {
        let mut state = self.lock();
        state.delete_post_calls.push(post_id);
        let before = state.user_posts.len();
        state.user_posts.retain(|p| p.id != post_id);
        if state.user_posts.len() == before {
            return Err(fail("post delete"));
        }
        Ok(())
    }
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
        items: vec![sample_item(7, "common card")],
    }
}

pub fn sample_item(id: i64, name: &str) -> BoxItem {
    BoxItem {
        id: Some(id),
        name: name.to_string(),
        description: String::new(),
        image_url: String::new(),
        quantity: 9,
    }
}

pub fn sample_reveal() -> Reveal {
    Reveal {
        item: sample_item(8, "rare card"),
        blind_box: Some(sample_box(1, "Pass 19.0", 98)),
        status: Some(OrderStatus::NotShipped),
    }
}

pub fn sample_order(id: i64, status: OrderStatus) -> Order {
    Order {
        id,
        user: sample_user(3, "alice"),
        blind_box: sample_box(1, "Pass 19.0", 99),
        item: sample_item(7, "common card"),
        purchase_time: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        status,
    }
}

pub fn sample_post(id: i64, content: &str, like_count: i64) -> Post {
    Post {
        id,
        content: content.to_string(),
        image: None,
        author: Some(PostAuthor {
            id: Some(3),
            username: "alice".to_string(),
            avatar: "/avatars/sea.jpg".to_string(),
        }),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap() + chrono::Duration::minutes(id),
        like_count,
    }
}
