const TOKEN_STORAGE_KEY: &str = "smart_tasker.token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

pub fn load_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
