//! Fingerprints of raw dataset content.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw dataset bytes.
///
/// Two loads with the same checksum hold the same rows, so derived results
/// can be reused between them.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"episode,title\n1,Pilot\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
        assert_eq!(calculate_checksum(content).len(), 64);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum(b"episode\n1\n");
        let checksum2 = calculate_checksum(b"episode\n2\n");
        assert_ne!(checksum1, checksum2);
    }
}
