pub mod http;
pub mod openai;
pub mod webhook;
pub mod whatsapp;
