//! Browser implementations of the lead capture seams

use autopilot_core::config::{API_BASE_URL_KEY, CLIENT_API_KEY_KEY, RECAPTCHA_SITE_KEY_KEY};
use autopilot_core::recaptcha::{LocalScriptInjector, LocalTokenProvider, ScriptLoader};
use autopilot_core::transport::{LocalLeadTransport, TransportResponse};
use autopilot_core::{Error, Result, SiteConfig};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, HtmlScriptElement, Request, RequestInit, Response};

/// Configuration baked in when the site is built, e.g.
/// `API_BASE_URL=https://api.example.com trunk build --release`.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_lookup(|key| {
        let value = match key {
            API_BASE_URL_KEY => option_env!("API_BASE_URL"),
            CLIENT_API_KEY_KEY => option_env!("CLIENT_API_KEY"),
            RECAPTCHA_SITE_KEY_KEY => option_env!("RECAPTCHA_SITE_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::transport("no window available"))
}

/// `fetch`-backed webhook client
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl LocalLeadTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse> {
        let to_transport = |e: JsValue| Error::transport(describe(&e));

        let headers = Headers::new().map_err(to_transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(to_transport)?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &init).map_err(to_transport)?;
        let response: Response = JsFuture::from(window()?.fetch_with_request(&request))
            .await
            .map_err(to_transport)?
            .dyn_into()
            .map_err(to_transport)?;

        // Only failures need the body, and only for the log
        let text = if response.ok() {
            String::new()
        } else {
            match response.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            }
        };

        Ok(TransportResponse::new(response.status(), text))
    }
}

fn grecaptcha() -> Option<Object> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("grecaptcha")).ok()?;
    value.dyn_into::<Object>().ok()
}

fn execute_fn(grecaptcha: &Object) -> Option<Function> {
    Reflect::get(grecaptcha, &JsValue::from_str("execute"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// `window.grecaptcha.execute`
#[derive(Debug, Clone, Copy, Default)]
pub struct GrecaptchaTokens;

impl LocalTokenProvider for GrecaptchaTokens {
    fn is_ready(&self) -> bool {
        ScriptLoader::global().is_loaded() && grecaptcha().as_ref().and_then(execute_fn).is_some()
    }

    async fn execute(&self, site_key: &str, action: &str) -> Result<String> {
        let to_token_err = |e: JsValue| Error::token_unavailable(describe(&e));

        let grecaptcha = grecaptcha().ok_or_else(|| Error::token_unavailable("grecaptcha missing"))?;
        let execute = execute_fn(&grecaptcha)
            .ok_or_else(|| Error::token_unavailable("grecaptcha.execute missing"))?;

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("action"), &JsValue::from_str(action))
            .map_err(to_token_err)?;

        let promise: Promise = execute
            .call2(&grecaptcha, &JsValue::from_str(site_key), &options)
            .map_err(to_token_err)?
            .dyn_into()
            .map_err(to_token_err)?;

        JsFuture::from(promise)
            .await
            .map_err(to_token_err)?
            .as_string()
            .ok_or_else(|| Error::token_unavailable("token is not a string"))
    }
}

/// Appends an async `<script>` to `<head>` and waits for `onload`/`onerror`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptTagInjector;

impl LocalScriptInjector for ScriptTagInjector {
    async fn inject(&self, src: &str) -> Result<()> {
        let to_load_err = |e: JsValue| Error::script_load(describe(&e));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::script_load("no document available"))?;
        let head = document
            .head()
            .ok_or_else(|| Error::script_load("document has no <head>"))?;

        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(to_load_err)?
            .dyn_into()
            .map_err(|_| Error::script_load("created element is not a script"))?;
        script.set_src(src);
        script.set_async(true);

        let loaded = Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        head.append_child(&script).map_err(to_load_err)?;

        JsFuture::from(loaded)
            .await
            .map_err(|_| Error::script_load(format!("{src} failed to load")))?;
        Ok(())
    }
}
