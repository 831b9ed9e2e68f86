//! The reqwest-backed gateway implementation
//!
//! One shared HTTP client, the configured base origin and timeout, a
//! generated request id on every call, and the wire mapping for each
//! operation. Several backend deletes are GETs with side effects; that
//! quirk is inherited from the backend and confined to this file so call
//! sites stay intent-named.

use std::time::Duration;

use reqwest::multipart;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use common::config::ClientConfig;
use common::error::{ClientError, ClientResult};
use common::models::{BestSeller, BlindBox, BoxDraft, NewPost, Order, OrderStatus, Post, User};
use common::session::AdminCredential;

use crate::StorefrontBackend;
use crate::envelope::{Ack, LoginEnvelope, PostsPage, PurchaseReceipt, Reveal, StatusEnvelope};

/// HTTP gateway to the blind-box backend
#[derive(Clone)]
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ApiGateway {
    /// Build a gateway from the client configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("x-request-id", Uuid::new_v4().to_string())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Backend(format!("http status {status}")));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(reqwest::Method::GET, path)).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(reqwest::Method::POST, path).json(body))
            .await
    }
}

impl StorefrontBackend for ApiGateway {
    async fn list_boxes(&self) -> ClientResult<Vec<BlindBox>> {
        info!("fetching box catalog");
        let envelope: StatusEnvelope<Vec<BlindBox>> = self.get_json("/blind-box/all").await?;
        envelope.into_data()
    }

    async fn box_detail(&self, box_id: i64) -> ClientResult<BlindBox> {
        info!("fetching detail for box {box_id}");
        let envelope: StatusEnvelope<BlindBox> =
            self.get_json(&format!("/blind-box/{box_id}")).await?;
        envelope.into_data()
    }

    async fn purchase(&self, user_id: i64, box_id: i64) -> ClientResult<i64> {
        info!("purchasing box {box_id} for user {user_id}");
        let envelope: StatusEnvelope<PurchaseReceipt> = self
            .post_json(
                "/blind-box/purchase",
                &serde_json::json!({"userId": user_id, "boxId": box_id}),
            )
            .await?;
        Ok(envelope.into_data()?.order_id)
    }

    async fn reveal(&self, order_id: i64) -> ClientResult<Reveal> {
        info!("revealing order {order_id}");
        self.post_json("/blind-box/reveal", &serde_json::json!({"orderId": order_id}))
            .await
    }

    async fn best_sellers(&self) -> ClientResult<Vec<BestSeller>> {
        info!("fetching best sellers");
        let envelope: StatusEnvelope<Vec<BestSeller>> =
            self.get_json("/blind-box/best-sellers").await?;
        envelope.into_data()
    }

    async fn orders_for_user(&self, user_id: i64) -> ClientResult<Vec<Order>> {
        info!("fetching orders for user {user_id}");
        let envelope: StatusEnvelope<Vec<Order>> =
            self.get_json(&format!("/blind-box/orders/{user_id}")).await?;
        envelope.into_data()
    }

    async fn all_orders(
        &self,
        credential: &AdminCredential,
        status: Option<OrderStatus>,
    ) -> ClientResult<Vec<Order>> {
        info!(
            "admin {} fetching all orders (filter: {:?})",
            credential.user_id(),
            status.map(OrderStatus::label)
        );
        let mut builder = self.request(reqwest::Method::GET, "/blind-box/all-orders");
        if let Some(status) = status {
            builder = builder.query(&[("status", status.code())]);
        }
        let envelope: StatusEnvelope<Vec<Order>> = self.send(builder).await?;
        envelope.into_data()
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        info!("updating order {order_id} to status {}", status.label());
        let ack: Ack = self
            .post_json(
                "/blind-box/updateOrderStatus",
                &serde_json::json!({"orderId": order_id, "status": status.code()}),
            )
            .await?;
        ack.into_result()
    }

    async fn delete_order(&self, order_id: i64) -> ClientResult<()> {
        info!("deleting order {order_id}");
        // Delete-via-GET, inherited from the backend contract.
        let ack: Ack = self.get_json(&format!("/blind-box/deleteOrder/{order_id}")).await?;
        ack.into_result()
    }

    async fn register(&self, username: &str, password: &str, avatar: &str) -> ClientResult<()> {
        info!("registering user {username}");
        let ack: Ack = self
            .post_json(
                "/user/register",
                &serde_json::json!({
                    "username": username,
                    "password": password,
                    "avatar": avatar
                }),
            )
            .await?;
        ack.into_result()
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        info!("logging in user {username}");
        let envelope: LoginEnvelope = self
            .post_json(
                "/user/login",
                &serde_json::json!({"username": username, "password": password}),
            )
            .await?;
        envelope.into_user()
    }

    async fn user_info(&self, uid: &str) -> ClientResult<User> {
        info!("fetching user info for {uid}");
        let builder = self
            .request(reqwest::Method::GET, "/user/info")
            .query(&[("uid", uid)]);
        let envelope: StatusEnvelope<User> = self.send(builder).await?;
        envelope.into_data()
    }

    async fn all_users(&self, credential: &AdminCredential) -> ClientResult<Vec<User>> {
        info!("admin {} fetching all users", credential.user_id());
        let envelope: StatusEnvelope<Vec<User>> = self.get_json("/user/all").await?;
        envelope.into_data()
    }

    async fn delete_user(&self, credential: &AdminCredential, username: &str) -> ClientResult<()> {
        info!("admin {} deleting user {username}", credential.user_id());
        // Delete-via-GET, inherited from the backend contract.
        let builder = self
            .request(reqwest::Method::GET, "/user/delete")
            .query(&[("username", username)]);
        let ack: Ack = self.send(builder).await?;
        ack.into_result()
    }

    async fn create_box(&self, credential: &AdminCredential, draft: &BoxDraft) -> ClientResult<()> {
        info!("admin {} creating box {}", credential.user_id(), draft.name);
        let ack: Ack = self.post_json("/blind-box/create", draft).await?;
        ack.into_result()
    }

    async fn update_box(
        &self,
        credential: &AdminCredential,
        box_id: i64,
        draft: &BoxDraft,
    ) -> ClientResult<()> {
        info!("admin {} updating box {box_id}", credential.user_id());
        let mut body = serde_json::to_value(draft)?;
        body["id"] = serde_json::json!(box_id);
        let ack: Ack = self.post_json("/blind-box/update", &body).await?;
        ack.into_result()
    }

    async fn delete_box(&self, credential: &AdminCredential, box_id: i64) -> ClientResult<()> {
        info!("admin {} deleting box {box_id}", credential.user_id());
        let ack: Ack = self
            .post_json("/blind-box/delete", &serde_json::json!({"id": box_id}))
            .await?;
        ack.into_result()
    }

    async fn list_posts(&self) -> ClientResult<Vec<Post>> {
        info!("fetching community feed");
        let envelope: StatusEnvelope<PostsPage> = self.get_json("/posts").await?;
        Ok(envelope.into_data()?.posts)
    }

    async fn create_post(&self, new_post: &NewPost) -> ClientResult<()> {
        info!("publishing post for user {}", new_post.user_id);
        let mut form = multipart::Form::new()
            .text("userId", new_post.user_id.to_string())
            .text("content", new_post.content.clone());
        if let Some(image) = &new_post.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone());
            form = form.part("image", part);
        }

        let response = self
            .request(reqwest::Method::POST, "/posts")
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Backend(format!("http status {status}")));
        }
        // The backend sends no meaningful body here; 2xx is success.
        Ok(())
    }

    async fn like_post(&self, post_id: i64, user_id: i64) -> ClientResult<()> {
        info!("user {user_id} liking post {post_id}");
        let ack: Ack = self
            .post_json(
                "/posts/like",
                &serde_json::json!({"postId": post_id, "userId": user_id}),
            )
            .await?;
        ack.into_result()
    }

    async fn posts_for_user(&self, user_id: i64) -> ClientResult<Vec<Post>> {
        info!("fetching posts of user {user_id}");
        let envelope: StatusEnvelope<Vec<Post>> =
            self.get_json(&format!("/posts/user/{user_id}")).await?;
        envelope.into_data()
    }

    async fn delete_post(&self, post_id: i64) -> ClientResult<()> {
        info!("deleting post {post_id}");
        // Delete-via-GET, inherited from the backend contract.
        let ack: Ack = self.get_json(&format!("/posts/cancel/{post_id}")).await?;
        ack.into_result()
    }
}
