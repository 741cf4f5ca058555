use canonical_huffman::HuffmanCodec;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a sample file
    let sample_text = "Hello, world! This is a sample text for Huffman compression.\n\
                       The quick brown fox jumps over the lazy dog.\n\
                       Canonical codes only need their lengths to be rebuilt.\n";

    std::fs::write("sample.txt", sample_text)?;

    println!("📝 Created sample file: {} bytes", sample_text.len());

    // Compress the file
    let codec = HuffmanCodec::default();
    let (output, summary) = codec.encode_file(Path::new("sample.txt"))?;

    let compressed_size = std::fs::metadata(&output)?.len();
    let compression_ratio = compressed_size as f64 / sample_text.len() as f64;

    println!(
        "🗜️  Compressed to: {} bytes ({:.1}% of original)",
        compressed_size,
        compression_ratio * 100.0
    );
    println!(
        "   header {} bytes ({}-bit lengths), content {} bytes, longest code {} bits",
        summary.header_bytes, summary.width, summary.content_bytes, summary.max_code_length
    );

    // Cleanup
    std::fs::remove_file("sample.txt")?;
    std::fs::remove_file(&output)?;

    println!("🧹 Cleaned up temporary files");

    Ok(())
}
