//! Word-by-word reply printing.

use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Split `text` on spaces, keeping a trailing space on each word.
pub fn word_chunks(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(' ').map(|word| format!("{word} "))
}

/// Write `text` to `out`, pausing `delay` between words.
/// A zero delay writes the text in one go.
pub async fn type_out<W>(out: &mut W, text: &str, delay: Duration) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    if delay.is_zero() {
        out.write_all(text.as_bytes()).await?;
    } else {
        for chunk in word_chunks(text) {
            out.write_all(chunk.as_bytes()).await?;
            out.flush().await?;
            tokio::time::sleep(delay).await;
        }
    }
    out.write_all(b"\n").await?;
    out.flush().await
}
