use sha2::{Digest, Sha256};

/// 比较管理员密码
///
/// 先取摘要再比较，比较耗时与密码内容无关。
pub fn verify_password(candidate: &str, expected: &str) -> bool {
    Sha256::digest(candidate.as_bytes()) == Sha256::digest(expected.as_bytes())
}
