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

use std::collections::HashMap;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use s3canon_s3::{encode_path, query_encode};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("path_unreserved", |b| {
        b.iter(|| encode_path("photos/2024/summer/IMG_0001.jpg"))
    });

    group.bench_function("path_escaped", |b| {
        b.iter(|| encode_path("photos/2024 summer/文件名 (1).jpg"))
    });

    let params: HashMap<String, Vec<String>> = HashMap::from([
        ("list-type".to_string(), vec!["2".to_string()]),
        ("prefix".to_string(), vec!["photos/2024 summer/".to_string()]),
        ("delimiter".to_string(), vec!["/".to_string()]),
        ("max-keys".to_string(), vec!["1000".to_string()]),
    ]);
    group.bench_function("query", |b| b.iter(|| query_encode(&params)));

    group.finish();
}
