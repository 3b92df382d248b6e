//! 비밀번호 해싱
//!
//! bcrypt로 비밀번호를 해싱합니다. 해시마다 새 랜덤 솔트가 생성되므로
//! 같은 평문도 매번 다른 해시가 됩니다.
//! 해싱은 CPU를 오래 점유하므로 actix 워커가 아닌 블로킹 스레드 풀에서 실행합니다.

use std::time::Instant;
use actix_web::web;
use log::debug;
use crate::config::PasswordConfig;
use crate::core::errors::{AppResult, ErrorContext};

/// bcrypt 비밀번호 해셔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경 설정(`BCRYPT_COST`, `ENVIRONMENT`)에서 비용을 읽어 생성합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호를 해싱합니다.
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let started = Instant::now();
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .context("비밀번호 해싱 작업 실패")?
            .context("비밀번호 해싱 실패")?;

        debug!("Password hashing took: {:?}", started.elapsed());
        Ok(hashed)
    }

    /// 평문이 저장된 해시와 일치하는지 확인합니다.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, hashed).context("비밀번호 검증 실패")
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
