//! Brennan Jarvis Chat Example
//!
//! Runs a short scripted conversation. With `BRENNAN_CHAT_API_KEY` set the
//! remote completion endpoint answers; otherwise the offline keyword
//! responder does. The transcript is exported to the temp directory.
//!
//! ```text
//! BRENNAN_CHAT_API_KEY=sk-... cargo run -p brennan-connectors --example 01_jarvis_chat
//! ```

use brennan_connectors::{
    ChatResponder, ChatSession, CompletionConfig, KeywordResponder, RemoteResponder, SessionConfig,
    UreqTransport, Utterance,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Brennan Jarvis Chat Example ===\n");

    let config = CompletionConfig::from_env();
    let responder: Box<dyn ChatResponder> = if config.is_configured() {
        println!("Using remote completions ({})\n", config.model);
        Box::new(RemoteResponder::new(config, UreqTransport::default()))
    } else {
        println!("No API key configured, using offline replies\n");
        Box::new(KeywordResponder::new())
    };

    let mut session = ChatSession::new(responder).with_config(SessionConfig::default().reply_latency(
        std::time::Duration::from_millis(300),
    ));

    let script = [
        "What are the latest crypto signals?",
        "plugin:sentiment:production numbers look good this week",
        "Summarize the plant's health metrics",
    ];

    for question in script {
        println!("You:    {question}");
        let Some(reply) = session.send(question).await else {
            continue;
        };
        let marker = if reply.error { " (failed)" } else { "" };
        // what a voice front end would read out
        println!("Jarvis{marker}: {}\n", Utterance::new(&reply.content).text);
    }

    let failed: Vec<_> = session.conversation().errors().map(|m| m.id.clone()).collect();
    for id in failed {
        if let Some(reply) = session.retry(&id).await {
            println!("Retry:  {}", reply.content);
        }
    }

    match session.export_to_dir(std::env::temp_dir()) {
        Ok(path) => println!("Transcript saved to {}", path.display()),
        Err(err) => eprintln!("export failed: {err}"),
    }
}
