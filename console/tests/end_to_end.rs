//! Drives the full presentation stack — controller, both real transports,
//! classification, rendering — against the live mock server.
//!
//! # Design
//! Same server pattern as the core integration suite: bind a random port,
//! run the mock server on a background current-thread runtime, then exercise
//! controller actions and assert on the rendered outcome views.

use std::cell::RefCell;
use std::net::SocketAddr;
use std::rc::Rc;

use post_console::{
    Connectivity, Controller, Form, FormData, Message, MessageKind, MessageSink, ReqwestTransport,
    UreqTransport,
};
use post_core::PostClient;

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Option<Message>>>);

impl RecordingSink {
    fn last(&self) -> Message {
        self.0.borrow().clone().expect("nothing rendered")
    }
}

impl MessageSink for RecordingSink {
    fn show(&mut self, message: Message) {
        *self.0.borrow_mut() = Some(message);
    }
}

#[derive(Clone, Default)]
struct TestForm(Rc<RefCell<FormData>>);

impl TestForm {
    fn set(&self, data: FormData) {
        *self.0.borrow_mut() = data;
    }

    fn current(&self) -> FormData {
        self.0.borrow().clone()
    }
}

impl Form for TestForm {
    fn read(&self) -> FormData {
        self.0.borrow().clone()
    }

    fn reset(&mut self) {
        *self.0.borrow_mut() = FormData::default();
    }
}

struct Online;

impl Connectivity for Online {
    fn is_online(&self) -> bool {
        true
    }
}

fn controller_for(base: &str, form: TestForm, sink: RecordingSink) -> Controller {
    Controller::new(
        PostClient::new(base),
        Box::new(UreqTransport::new()),
        Box::new(ReqwestTransport::new().unwrap()),
        Box::new(Online),
        Box::new(form),
        Box::new(sink),
    )
}

/// Pull the server-assigned id back out of a success view's detail text.
fn id_from_detail(message: &Message) -> String {
    message
        .detail
        .as_deref()
        .and_then(|d| d.lines().next())
        .and_then(|line| line.strip_prefix("ID: "))
        .expect("success detail starts with the id")
        .to_string()
}

#[test]
fn create_update_delete_lifecycle() {
    let addr = start_server();
    let base = format!("http://{addr}/posts");
    let sink = RecordingSink::default();
    let form = TestForm::default();
    let mut controller = controller_for(&base, form.clone(), sink.clone());

    // Create: empty id submits a POST.
    form.set(FormData {
        id: String::new(),
        title: "A".to_string(),
        body: "B".to_string(),
    });
    controller.submit();
    let created = sink.last();
    assert_eq!(created.kind, MessageKind::Success);
    assert_eq!(created.title, "Post Created");
    let detail = created.detail.as_deref().unwrap();
    assert!(detail.contains("Title: A"), "got: {detail}");
    let id = id_from_detail(&created);
    assert_eq!(form.current(), FormData::default(), "form resets on success");

    // Update: id present submits a PUT.
    form.set(FormData {
        id: id.clone(),
        title: "A2".to_string(),
        body: "B2".to_string(),
    });
    controller.submit();
    let updated = sink.last();
    assert_eq!(updated.title, "Post Updated");
    assert!(updated.detail.unwrap().contains("Title: A2"));

    // Delete.
    form.set(FormData {
        id: id.clone(),
        ..FormData::default()
    });
    controller.delete_post();
    let deleted = sink.last();
    assert_eq!(deleted.kind, MessageKind::Success);
    assert_eq!(deleted.title, "Post Deleted");
    assert_eq!(deleted.detail.as_deref(), Some(format!("Post {id} removed").as_str()));

    // The post is gone: a read now renders the server's rejection.
    controller.fetch_post(&id);
    let rejected = sink.last();
    assert_eq!(rejected.kind, MessageKind::Validation);
    assert_eq!(rejected.title, "Request Failed");
    assert!(rejected.detail.unwrap().contains("HTTP error: 404"));
}

#[test]
fn both_transports_render_identical_views() {
    let addr = start_server();
    let base = format!("http://{addr}/posts");
    let sink = RecordingSink::default();
    let form = TestForm::default();
    let mut controller = controller_for(&base, form.clone(), sink.clone());

    form.set(FormData {
        id: String::new(),
        title: "T".to_string(),
        body: "Bdy".to_string(),
    });
    controller.submit();
    let id = id_from_detail(&sink.last());

    controller.fetch_post(&id);
    let via_primary = sink.last();
    controller.fetch_post_alternate(&id);
    let via_alternate = sink.last();

    assert_eq!(via_primary, via_alternate);
    assert_eq!(via_primary.kind, MessageKind::Success);
    assert_eq!(via_primary.title, "T");
    assert_eq!(via_primary.detail.as_deref(), Some("Bdy"));
}

#[test]
fn unreachable_server_renders_server_error_on_both_transports() {
    // Bind and immediately drop a listener so the port is very likely closed.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let base = format!("http://{addr}/posts");
    let sink = RecordingSink::default();
    let mut controller = controller_for(&base, TestForm::default(), sink.clone());

    controller.fetch_post("1");
    let via_primary = sink.last();
    assert_eq!(via_primary.kind, MessageKind::Server);
    assert_eq!(via_primary.title, "Server Error");
    assert_eq!(via_primary.detail.as_deref(), Some("Cannot connect to server"));

    controller.fetch_post_alternate("1");
    let via_alternate = sink.last();
    assert_eq!(via_alternate, via_primary);
}

#[test]
fn delete_without_id_never_reaches_the_server() {
    // No server at all: if the controller tried to send, it would render a
    // server error instead of the local validation message.
    let sink = RecordingSink::default();
    let mut controller = controller_for(
        "http://127.0.0.1:9/posts",
        TestForm::default(),
        sink.clone(),
    );

    controller.delete_post();
    let msg = sink.last();
    assert_eq!(msg.kind, MessageKind::Validation);
    assert_eq!(msg.title, "Missing Post ID");
    assert!(msg.detail.is_none());
}
