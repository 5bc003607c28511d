use super::*;

#[test]
fn login_endpoint_appends_authorizations_path() {
    assert_eq!(login_endpoint("http://127.0.0.1:8000"), "http://127.0.0.1:8000/authorizations/");
}

#[test]
fn qq_authorization_endpoint_passes_plain_state() {
    assert_eq!(
        qq_authorization_endpoint("http://api.test", "/"),
        "http://api.test/oauth/qq/authorization/?state=%2F"
    );
}

#[test]
fn qq_authorization_endpoint_encodes_query_characters() {
    assert_eq!(
        qq_authorization_endpoint("http://api.test", "/cart.html?sku=1&n=2"),
        "http://api.test/oauth/qq/authorization/?state=%2Fcart.html%3Fsku%3D1%26n%3D2"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpAuthApi::new(ApiConfig::new("http://api.test"));
    let creds = Credentials { username: "alice".to_owned(), password: "pw".to_owned() };
    assert_eq!(futures::executor::block_on(api.login(&creds)), Err(LoginError::Unavailable));
    assert_eq!(futures::executor::block_on(api.qq_authorization("/")), Err(LoginError::Unavailable));
}
