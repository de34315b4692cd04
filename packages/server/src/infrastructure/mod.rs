//! Infrastructure layer
//!
//! ドメイン層が定義する trait の具体的な実装と、HTTP 用の DTO を提供します。

pub mod dto;
pub mod repository;
