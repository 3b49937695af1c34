#[tokio::main]
async fn main() -> anyhow::Result<()> {
    german_flashcards::run().await
}
