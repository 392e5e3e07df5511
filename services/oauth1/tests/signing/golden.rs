// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::{init, photos_context};
use anyhow::Result;
use http::{Method, Uri};
use pretty_assertions::assert_eq;
use reqsign_oauth1::{
    authorize, base_uri, compute_signature, normalize_parameters, signature_base_string,
    Parameter, ParameterHandling, RequestDescriptor, SignatureMethod, SignatureTreatment,
    SigningOptions,
};
use std::str::FromStr;

const PHOTOS_BASE_STRING: &str = "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal";

#[test]
fn test_oauth_core_appendix_step_by_step() -> Result<()> {
    init();

    let uri = Uri::from_str("http://photos.example.net/photos?file=vacation.jpg&size=original")?;
    let params = vec![
        Parameter::query("file", "vacation.jpg"),
        Parameter::query("size", "original"),
        Parameter::protocol("oauth_consumer_key", "dpf43f3p2l4k3l03"),
        Parameter::protocol("oauth_token", "nnch734d00sl2jdk"),
        Parameter::protocol("oauth_signature_method", "HMAC-SHA1"),
        Parameter::protocol("oauth_timestamp", "1191242096"),
        Parameter::protocol("oauth_nonce", "kllo9940pd9333jh"),
        Parameter::protocol("oauth_version", "1.0"),
    ];

    let normalized = normalize_parameters(&params)?;
    assert_eq!(
        normalized,
        "file=vacation.jpg&oauth_consumer_key=dpf43f3p2l4k3l03&oauth_nonce=kllo9940pd9333jh&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1191242096&oauth_token=nnch734d00sl2jdk&oauth_version=1.0&size=original"
    );

    let base = signature_base_string(&Method::GET, &base_uri(&uri)?, &normalized);
    assert_eq!(base, PHOTOS_BASE_STRING);

    let signature = compute_signature(SignatureMethod::HmacSha1, &base, &photos_context(), None)?;
    assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");

    Ok(())
}

#[test]
fn test_rfc5849_example_request() -> Result<()> {
    init();

    // RFC 5849, Section 3.4.1: query, form body and protocol parameters together.
    let ctx = reqsign_oauth1::CredentialContext::new("9djdj82h48djs9d2", "7d8f3e4a", "137131201")
        .with_consumer_secret("j49sk3j29djd")
        .with_token("kkk9d7dh3k39sjv7")
        .with_token_secret("dh893hdasih9")
        .with_realm("Example");
    let req = RequestDescriptor::new(
        Method::POST,
        Uri::from_str("http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b")?,
    )
    .with_form_body(b"c2&a3=2+q");

    let options = SigningOptions {
        signature_treatment: SignatureTreatment::Unescaped,
        ..Default::default()
    };
    let header = authorize(&req, &ctx, None, &options)?;
    let header = header.header().expect("header mode must produce a header");

    // The RFC example omits oauth_version, we always send it.
    assert_eq!(
        header,
        "OAuth realm=\"Example\", oauth_consumer_key=\"9djdj82h48djs9d2\", oauth_nonce=\"7d8f3e4a\", oauth_signature=\"OB33pYjWAnf+xtOHN4Gmbdil168=\", oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"137131201\", oauth_token=\"kkk9d7dh3k39sjv7\", oauth_version=\"1.0\""
    );

    Ok(())
}

#[test]
fn test_rfc5849_signature_without_version() -> Result<()> {
    let ctx = reqsign_oauth1::CredentialContext::new("9djdj82h48djs9d2", "7d8f3e4a", "137131201")
        .with_consumer_secret("j49sk3j29djd")
        .with_token_secret("dh893hdasih9");
    let base = "POST&http%3A%2F%2Fexample.com%2Frequest&a2%3Dr%2520b%26a3%3D2%2520q%26a3%3Da%26b5%3D%253D%25253D%26c%2540%3D%26c2%3D%26oauth_consumer_key%3D9djdj82h48djs9d2%26oauth_nonce%3D7d8f3e4a%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D137131201%26oauth_token%3Dkkk9d7dh3k39sjv7";

    // Section 3.4.1 prints a wrong signature for this base string.
    let signature = compute_signature(SignatureMethod::HmacSha1, base, &ctx, None)?;
    assert_eq!(signature, "r6/TJjbCOr97/+UU0NsvSne7s5g=");

    Ok(())
}

#[test]
fn test_parameter_mode_carries_signature() -> Result<()> {
    init();

    let req = RequestDescriptor::new(
        Method::GET,
        Uri::from_str("http://photos.example.net/photos?file=vacation.jpg&size=original")?,
    );
    let options = SigningOptions {
        parameter_handling: ParameterHandling::UrlOrPostParameters,
        ..Default::default()
    };

    let auth = authorize(&req, &photos_context(), None, &options)?;
    assert!(auth.header().is_none());

    let params = auth.parameters().expect("parameter mode must produce parameters");
    assert!(params.contains(&(
        "oauth_signature".to_string(),
        "tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D".to_string()
    )));
    assert!(params.iter().all(|(k, _)| k != "realm"));

    Ok(())
}
