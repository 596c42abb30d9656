//! Descriptions of EPSG codes that are recognized but not modeled.
//!
//! Codes are mostly assigned in series, e.g. a State Plane realization zone after zone, so the
//! registry is a sorted list of runs of consecutive codes.

pub(super) struct Run {
    pub(super) first: u16,
    pub(super) descriptions: &'static [&'static str],
}

impl Run {
    #[cfg(test)]
    pub(super) fn codes(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.descriptions.len()).map(move |i| self.first + i as u16)
    }
}

const fn run(first: u16, descriptions: &'static [&'static str]) -> Run {
    Run {
        first,
        descriptions,
    }
}

pub(super) fn describe(code: u16) -> Option<&'static str> {
    let i = RUNS.partition_point(|run| run.first <= code).checked_sub(1)?;
    let run = &RUNS[i];
    run.descriptions.get(usize::from(code - run.first)).copied()
}

pub(super) const RUNS: &[Run] = &[
    run(2000, &["Anguilla 1957 / British West Indies Grid"]),
    run(2027, &[
        "NAD27(76) / UTM zone 15N",
        "NAD27(76) / UTM zone 16N",
        "NAD27(76) / UTM zone 17N",
        "NAD27(76) / UTM zone 18N",
        "NAD27(CGQ77) / UTM zone 17N",
        "NAD27(CGQ77) / UTM zone 18N",
        "NAD27(CGQ77) / UTM zone 19N",
        "NAD27(CGQ77) / UTM zone 20N",
        "NAD27(CGQ77) / UTM zone 21N",
        "NAD83(CSRS98) / New Brunswick Stereo",
    ]),
    run(2046, &[
        "Hartebeesthoek94 / Lo15",
        "Hartebeesthoek94 / Lo17",
        "Hartebeesthoek94 / Lo19",
        "Hartebeesthoek94 / Lo21",
        "Hartebeesthoek94 / Lo23",
        "Hartebeesthoek94 / Lo25",
        "Hartebeesthoek94 / Lo27",
        "Hartebeesthoek94 / Lo29",
        "Hartebeesthoek94 / Lo31",
        "Hartebeesthoek94 / Lo33",
        "CH1903+ / LV95",
    ]),
    run(2058, &["ED50(ED77) / UTM zone 38N"]),
    run(2065, &["S-JTSK (Ferro) / Krovak"]),
    run(2105, &[
        "NZGD2000 / Mount Eden 2000",
        "NZGD2000 / Bay of Plenty 2000",
        "NZGD2000 / Poverty Bay 2000",
        "NZGD2000 / Hawkes Bay 2000",
        "NZGD2000 / Taranaki 2000",
        "NZGD2000 / Tuhirangi 2000",
        "NZGD2000 / Wanganui 2000",
        "NZGD2000 / Wairarapa 2000",
        "NZGD2000 / Wellington 2000",
        "NZGD2000 / Collingwood 2000",
        "NZGD2000 / Nelson 2000",
        "NZGD2000 / Karamea 2000",
        "NZGD2000 / Buller 2000",
        "NZGD2000 / Grey 2000",
        "NZGD2000 / Amuri 2000",
        "NZGD2000 / Marlborough 2000",
        "NZGD2000 / Hokitika 2000",
        "NZGD2000 / Okarito 2000",
        "NZGD2000 / Jacksons Bay 2000",
        "NZGD2000 / Mount Pleasant 2000",
        "NZGD2000 / Gawler 2000",
        "NZGD2000 / Timaru 2000",
        "NZGD2000 / Lindis Peak 2000",
        "NZGD2000 / Mount Nicholas 2000",
        "NZGD2000 / Mount York 2000",
        "NZGD2000 / Observation Point 2000",
        "NZGD2000 / North Taieri 2000",
        "NZGD2000 / Bluff 2000",
    ]),
    run(2136, &["Accra / Ghana National Grid"]),
    run(2140, &["NAD83(CSRS98) / SCoPQ zone 3"]),
    run(2155, &["American Samoa 1962 / American Samoa Lambert"]),
    run(2163, &["US National Atlas Equal Area"]),
    run(2222, &[
        "NAD83 / Arizona East (ft)",
        "NAD83 / Arizona Central (ft)",
        "NAD83 / Arizona West (ft)",
        "NAD83 / California zone 1 (ftUS)",
        "NAD83 / California zone 2 (ftUS)",
        "NAD83 / California zone 3 (ftUS)",
        "NAD83 / California zone 4 (ftUS)",
        "NAD83 / California zone 5 (ftUS)",
        "NAD83 / California zone 6 (ftUS)",
        "NAD83 / Colorado North (ftUS)",
        "NAD83 / Colorado Central (ftUS)",
        "NAD83 / Colorado South (ftUS)",
        "NAD83 / Connecticut (ftUS)",
        "NAD83 / Delaware (ftUS)",
        "NAD83 / Florida East (ftUS)",
        "NAD83 / Florida West (ftUS)",
        "NAD83 / Florida North (ftUS)",
        "NAD83 / Georgia East (ftUS)",
        "NAD83 / Georgia West (ftUS)",
        "NAD83 / Idaho East (ftUS)",
        "NAD83 / Idaho Central (ftUS)",
        "NAD83 / Idaho West (ftUS)",
        "NAD83 / Indiana East (ftUS)",
        "NAD83 / Indiana West (ftUS)",
        "NAD83 / Kentucky North (ftUS)",
        "NAD83 / Kentucky South (ftUS)",
    ]),
    run(2249, &[
        "NAD83 / Massachusetts Mainland (ftUS)",
        "NAD83 / Massachusetts Island (ftUS)",
        "NAD83 / Michigan North (ft)",
        "NAD83 / Michigan Central (ft)",
        "NAD83 / Michigan South (ft)",
        "NAD83 / Mississippi East (ftUS)",
        "NAD83 / Mississippi West (ftUS)",
        "NAD83 / Montana (ft)",
        "NAD83 / New Mexico East (ftUS)",
        "NAD83 / New Mexico Central (ftUS)",
        "NAD83 / New Mexico West (ftUS)",
        "NAD83 / New York East (ftUS)",
        "NAD83 / New York Central (ftUS)",
        "NAD83 / New York West (ftUS)",
        "NAD83 / New York Long Island (ftUS)",
        "NAD83 / North Carolina (ftUS)",
        "NAD83 / North Dakota North (ft)",
        "NAD83 / North Dakota South (ft)",
        "NAD83 / Oklahoma North (ftUS)",
        "NAD83 / Oklahoma South (ftUS)",
        "NAD83 / Oregon North (ft)",
        "NAD83 / Oregon South (ft)",
        "NAD83 / Pennsylvania North (ftUS)",
        "NAD83 / Pennsylvania South (ftUS)",
        "NAD83 / South Carolina (ft)",
        "NAD83 / Tennessee (ftUS)",
        "NAD83 / Texas North (ftUS)",
        "NAD83 / Texas North Central (ftUS)",
        "NAD83 / Texas Central (ftUS)",
        "NAD83 / Texas South Central (ftUS)",
        "NAD83 / Texas South (ftUS)",
        "NAD83 / Utah North (ft)",
        "NAD83 / Utah Central (ft)",
        "NAD83 / Utah South (ft)",
        "NAD83 / Virginia North (ftUS)",
        "NAD83 / Virginia South (ftUS)",
        "NAD83 / Washington North (ftUS)",
        "NAD83 / Washington South (ftUS)",
        "NAD83 / Wisconsin North (ftUS)",
        "NAD83 / Wisconsin Central (ftUS)",
        "NAD83 / Wisconsin South (ftUS)",
    ]),
    run(2326, &[
        "Hong Kong 1980 Grid System",
        "Xian 1980 / Gauss-Kruger zone 13",
        "Xian 1980 / Gauss-Kruger zone 14",
        "Xian 1980 / Gauss-Kruger zone 15",
        "Xian 1980 / Gauss-Kruger zone 16",
        "Xian 1980 / Gauss-Kruger zone 17",
        "Xian 1980 / Gauss-Kruger zone 18",
        "Xian 1980 / Gauss-Kruger zone 19",
        "Xian 1980 / Gauss-Kruger zone 20",
        "Xian 1980 / Gauss-Kruger zone 21",
        "Xian 1980 / Gauss-Kruger zone 22",
        "Xian 1980 / Gauss-Kruger zone 23",
        "Xian 1980 / Gauss-Kruger CM 75E",
        "Xian 1980 / Gauss-Kruger CM 81E",
        "Xian 1980 / Gauss-Kruger CM 87E",
        "Xian 1980 / Gauss-Kruger CM 93E",
        "Xian 1980 / Gauss-Kruger CM 99E",
        "Xian 1980 / Gauss-Kruger CM 105E",
        "Xian 1980 / Gauss-Kruger CM 111E",
        "Xian 1980 / Gauss-Kruger CM 117E",
        "Xian 1980 / Gauss-Kruger CM 123E",
        "Xian 1980 / Gauss-Kruger CM 129E",
        "Xian 1980 / Gauss-Kruger CM 135E",
        "Xian 1980 / 3-degree Gauss-Kruger zone 25",
        "Xian 1980 / 3-degree Gauss-Kruger zone 26",
        "Xian 1980 / 3-degree Gauss-Kruger zone 27",
        "Xian 1980 / 3-degree Gauss-Kruger zone 28",
        "Xian 1980 / 3-degree Gauss-Kruger zone 29",
        "Xian 1980 / 3-degree Gauss-Kruger zone 30",
        "Xian 1980 / 3-degree Gauss-Kruger zone 31",
        "Xian 1980 / 3-degree Gauss-Kruger zone 32",
        "Xian 1980 / 3-degree Gauss-Kruger zone 33",
        "Xian 1980 / 3-degree Gauss-Kruger zone 34",
        "Xian 1980 / 3-degree Gauss-Kruger zone 35",
        "Xian 1980 / 3-degree Gauss-Kruger zone 36",
        "Xian 1980 / 3-degree Gauss-Kruger zone 37",
        "Xian 1980 / 3-degree Gauss-Kruger zone 38",
        "Xian 1980 / 3-degree Gauss-Kruger zone 39",
        "Xian 1980 / 3-degree Gauss-Kruger zone 40",
        "Xian 1980 / 3-degree Gauss-Kruger zone 41",
        "Xian 1980 / 3-degree Gauss-Kruger zone 42",
        "Xian 1980 / 3-degree Gauss-Kruger zone 43",
        "Xian 1980 / 3-degree Gauss-Kruger zone 44",
        "Xian 1980 / 3-degree Gauss-Kruger zone 45",
        "Xian 1980 / 3-degree Gauss-Kruger CM 75E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 78E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 81E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 84E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 87E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 90E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 93E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 96E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 99E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 102E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 105E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 108E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 111E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 114E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 117E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 120E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 123E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 126E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 129E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 132E",
        "Xian 1980 / 3-degree Gauss-Kruger CM 135E",
    ]),
    run(2398, &["Pulkovo 1942(83) / Gauss-Kruger zone 4"]),
    run(2400, &[
        "RT90 2.5 gon W",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 25",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 26",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 27",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 28",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 29",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 30",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 31",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 32",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 33",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 34",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 35",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 36",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 37",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 38",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 39",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 40",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 41",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 42",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 43",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 44",
        "Beijing 1954 / 3-degree Gauss-Kruger zone 45",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 75E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 78E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 81E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 84E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 87E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 90E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 93E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 96E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 99E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 102E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 105E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 108E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 111E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 114E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 117E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 120E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 123E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 126E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 129E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 132E",
        "Beijing 1954 / 3-degree Gauss-Kruger CM 135E",
        "JGD2000 / Japan Plane Rectangular CS I",
        "JGD2000 / Japan Plane Rectangular CS II",
        "JGD2000 / Japan Plane Rectangular CS III",
        "JGD2000 / Japan Plane Rectangular CS IV",
        "JGD2000 / Japan Plane Rectangular CS V",
        "JGD2000 / Japan Plane Rectangular CS VI",
        "JGD2000 / Japan Plane Rectangular CS VII",
        "JGD2000 / Japan Plane Rectangular CS VIII",
        "JGD2000 / Japan Plane Rectangular CS IX",
        "JGD2000 / Japan Plane Rectangular CS X",
        "JGD2000 / Japan Plane Rectangular CS XI",
        "JGD2000 / Japan Plane Rectangular CS XII",
        "JGD2000 / Japan Plane Rectangular CS XIII",
        "JGD2000 / Japan Plane Rectangular CS XIV",
        "JGD2000 / Japan Plane Rectangular CS XV",
        "JGD2000 / Japan Plane Rectangular CS XVI",
        "JGD2000 / Japan Plane Rectangular CS XVII",
        "JGD2000 / Japan Plane Rectangular CS XVIII",
        "JGD2000 / Japan Plane Rectangular CS XIX",
    ]),
    run(2867, &[
        "NAD83(HARN) / Arizona East (ft)",
        "NAD83(HARN) / Arizona Central (ft)",
        "NAD83(HARN) / Arizona West (ft)",
        "NAD83(HARN) / California zone 1 (ftUS)",
        "NAD83(HARN) / California zone 2 (ftUS)",
        "NAD83(HARN) / California zone 3 (ftUS)",
        "NAD83(HARN) / California zone 4 (ftUS)",
        "NAD83(HARN) / California zone 5 (ftUS)",
        "NAD83(HARN) / California zone 6 (ftUS)",
        "NAD83(HARN) / Colorado North (ftUS)",
        "NAD83(HARN) / Colorado Central (ftUS)",
        "NAD83(HARN) / Colorado South (ftUS)",
        "NAD83(HARN) / Connecticut (ftUS)",
        "NAD83(HARN) / Delaware (ftUS)",
        "NAD83(HARN) / Florida East (ftUS)",
        "NAD83(HARN) / Florida West (ftUS)",
        "NAD83(HARN) / Florida North (ftUS)",
        "NAD83(HARN) / Georgia East (ftUS)",
        "NAD83(HARN) / Georgia West (ftUS)",
        "NAD83(HARN) / Idaho East (ftUS)",
        "NAD83(HARN) / Idaho Central (ftUS)",
        "NAD83(HARN) / Idaho West (ftUS)",
        "NAD83(HARN) / Indiana East (ftUS)",
        "NAD83(HARN) / Indiana West (ftUS)",
        "NAD83(HARN) / Kentucky North (ftUS)",
        "NAD83(HARN) / Kentucky South (ftUS)",
        "NAD83(HARN) / Maryland (ftUS)",
        "NAD83(HARN) / Massachusetts Mainland (ftUS)",
        "NAD83(HARN) / Massachusetts Island (ftUS)",
        "NAD83(HARN) / Michigan North (ft)",
        "NAD83(HARN) / Michigan Central (ft)",
        "NAD83(HARN) / Michigan South (ft)",
        "NAD83(HARN) / Mississippi East (ftUS)",
        "NAD83(HARN) / Mississippi West (ftUS)",
        "NAD83(HARN) / Montana (ft)",
        "NAD83(HARN) / New Mexico East (ftUS)",
        "NAD83(HARN) / New Mexico Central (ftUS)",
        "NAD83(HARN) / New Mexico West (ftUS)",
        "NAD83(HARN) / New York East (ftUS)",
        "NAD83(HARN) / New York Central (ftUS)",
        "NAD83(HARN) / New York West (ftUS)",
        "NAD83(HARN) / New York Long Island (ftUS)",
        "NAD83(HARN) / North Dakota North (ft)",
        "NAD83(HARN) / North Dakota South (ft)",
        "NAD83(HARN) / Oklahoma North (ftUS)",
        "NAD83(HARN) / Oklahoma South (ftUS)",
        "NAD83(HARN) / Oregon North (ft)",
        "NAD83(HARN) / Oregon South (ft)",
        "NAD83(HARN) / Tennessee (ftUS)",
        "NAD83(HARN) / Texas North (ftUS)",
        "NAD83(HARN) / Texas North Central (ftUS)",
        "NAD83(HARN) / Texas Central (ftUS)",
        "NAD83(HARN) / Texas South Central (ftUS)",
        "NAD83(HARN) / Texas South (ftUS)",
        "NAD83(HARN) / Utah North (ft)",
        "NAD83(HARN) / Utah Central (ft)",
        "NAD83(HARN) / Utah South (ft)",
        "NAD83(HARN) / Virginia North (ftUS)",
        "NAD83(HARN) / Virginia South (ftUS)",
        "NAD83(HARN) / Washington North (ftUS)",
        "NAD83(HARN) / Washington South (ftUS)",
        "NAD83(HARN) / Wisconsin North (ftUS)",
        "NAD83(HARN) / Wisconsin Central (ftUS)",
        "NAD83(HARN) / Wisconsin South (ftUS)",
    ]),
    run(2964, &[
        "NAD27 / Alaska Albers",
        "NAD83 / Indiana East (ftUS)",
        "NAD83 / Indiana West (ftUS)",
        "NAD83(HARN) / Indiana East (ftUS)",
        "NAD83(HARN) / Indiana West (ftUS)",
    ]),
    run(2991, &[
        "NAD83 / Oregon LCC (m)",
        "NAD83 / Oregon GIC Lambert (ft)",
        "NAD83(HARN) / Oregon LCC (m)",
        "NAD83(HARN) / Oregon GIC Lambert (ft)",
    ]),
    run(3003, &[
        "Monte Mario / Italy zone 1",
        "Monte Mario / Italy zone 2",
        "NAD83 / BC Albers",
    ]),
    run(3007, &[
        "SWEREF99 12 00",
        "SWEREF99 13 30",
        "SWEREF99 15 00",
        "SWEREF99 16 30",
        "SWEREF99 18 00",
        "SWEREF99 14 15",
        "SWEREF99 15 45",
        "SWEREF99 17 15",
        "SWEREF99 18 45",
        "SWEREF99 20 15",
        "SWEREF99 21 45",
        "SWEREF99 23 15",
        "RT90 7.5 gon V",
        "RT90 5 gon V",
        "RT90 2.5 gon V",
        "RT90 0 gon",
        "RT90 2.5 gon O",
        "RT90 5 gon O",
    ]),
    run(3031, &[
        "WGS 84 / Antarctic Polar Stereographic",
        "WGS 84 / Australian Antarctic Polar Stereographic",
    ]),
    run(3035, &["ETRS89-extended / LAEA Europe"]),
    run(3038, &[
        "ETRS89 / UTM zone 26N (N-E)",
        "ETRS89 / UTM zone 27N (N-E)",
        "ETRS89 / UTM zone 28N (N-E)",
        "ETRS89 / UTM zone 29N (N-E)",
        "ETRS89 / UTM zone 30N (N-E)",
        "ETRS89 / UTM zone 31N (N-E)",
        "ETRS89 / UTM zone 32N (N-E)",
        "ETRS89 / UTM zone 33N (N-E)",
        "ETRS89 / UTM zone 34N (N-E)",
        "ETRS89 / UTM zone 35N (N-E)",
        "ETRS89 / UTM zone 36N (N-E)",
        "ETRS89 / UTM zone 37N (N-E)",
        "ETRS89 / UTM zone 38N (N-E)",
        "ETRS89 / UTM zone 39N (N-E)",
    ]),
    run(3069, &[
        "NAD27 / Wisconsin Transverse Mercator",
        "NAD83 / Wisconsin Transverse Mercator",
        "NAD83(HARN) / Wisconsin Transverse Mercator",
        "NAD83 / Maine CS2000 East",
        "NAD83 / Maine CS2000 Central",
        "NAD83 / Maine CS2000 West",
        "NAD83(HARN) / Maine CS2000 East",
        "NAD83(HARN) / Maine CS2000 Central",
        "NAD83(HARN) / Maine CS2000 West",
        "NAD83 / Michigan Oblique Mercator",
        "NAD83(HARN) / Michigan Oblique Mercator",
        "NAD27 / Shackleford",
        "NAD83 / Texas State Mapping System",
        "NAD83 / Texas Centric Lambert Conformal",
        "NAD83 / Texas Centric Albers Equal Area",
        "NAD83(HARN) / Texas Centric Lambert Conformal",
        "NAD83(HARN) / Texas Centric Albers Equal Area",
        "NAD83 / Florida GDL Albers",
        "NAD83(HARN) / Florida GDL Albers",
        "NAD83 / Kentucky Single Zone",
        "NAD83 / Kentucky Single Zone (ftUS)",
        "NAD83(HARN) / Kentucky Single Zone",
        "NAD83(HARN) / Kentucky Single Zone (ftUS)",
    ]),
    run(3102, &["American Samoa 1962 / American Samoa Lambert"]),
    run(3109, &["ETRS89 / Jersey Transverse Mercator"]),
    run(3112, &["GDA94 / Geoscience Australia Lambert"]),
    run(3126, &[
        "ETRS89 / ETRS-GK19FIN",
        "ETRS89 / ETRS-GK20FIN",
        "ETRS89 / ETRS-GK21FIN",
        "ETRS89 / ETRS-GK22FIN",
        "ETRS89 / ETRS-GK23FIN",
        "ETRS89 / ETRS-GK24FIN",
        "ETRS89 / ETRS-GK25FIN",
        "ETRS89 / ETRS-GK26FIN",
        "ETRS89 / ETRS-GK27FIN",
        "ETRS89 / ETRS-GK28FIN",
        "ETRS89 / ETRS-GK29FIN",
        "ETRS89 / ETRS-GK30FIN",
        "ETRS89 / ETRS-GK31FIN",
    ]),
    run(3152, &["ST74"]),
    run(3310, &[
        "NAD83 / California Albers",
        "NAD83(HARN) / California Albers",
    ]),
    run(3338, &["NAD83 / Alaska Albers"]),
    run(3347, &[
        "NAD83 / Statistics Canada Lambert",
        "NAD83(CSRS) / Statistics Canada Lambert",
    ]),
    run(3358, &["NAD83(HARN) / North Carolina"]),
    run(3360, &[
        "NAD83(HARN) / South Carolina",
        "NAD83(HARN) / South Carolina (ft)",
        "NAD83(HARN) / Pennsylvania North",
        "NAD83(HARN) / Pennsylvania North (ftUS)",
        "NAD83(HARN) / Pennsylvania South",
        "NAD83(HARN) / Pennsylvania South (ftUS)",
    ]),
    run(3395, &["WGS 84 / World Mercator"]),
    run(3400, &[
        "NAD83 / Alberta 10-TM (Forest)",
        "NAD83 / Alberta 10-TM (Resource)",
    ]),
    run(3404, &["NAD83(HARN) / North Carolina (ftUS)"]),
    run(3408, &[
        "NSIDC EASE-Grid North",
        "NSIDC EASE-Grid South",
        "NSIDC EASE-Grid Global",
    ]),
    run(3413, &["WGS 84 / NSIDC Sea Ice Polar Stereographic North"]),
    run(3417, &[
        "NAD83 / Iowa North (ftUS)",
        "NAD83 / Iowa South (ftUS)",
        "NAD83 / Kansas North (ftUS)",
        "NAD83 / Kansas South (ftUS)",
        "NAD83 / Nevada East (ft US)",
        "NAD83 / Nevada Central (ft US)",
        "NAD83 / Nevada West (ft US)",
        "NAD83 / New Jersey (ftUS)",
        "NAD83(HARN) / Iowa North (ftUS)",
        "NAD83(HARN) / Iowa South (ftUS)",
        "NAD83(HARN) / Kansas North (ftUS)",
        "NAD83(HARN) / Kansas South (ftUS)",
        "NAD83(HARN) / Nevada East (ft US)",
        "NAD83(HARN) / Nevada Central (ft US)",
        "NAD83(HARN) / Nevada West (ft US)",
        "NAD83(HARN) / New Jersey (ftUS)",
        "NAD83 / Arkansas North (ftUS)",
        "NAD83 / Arkansas South (ftUS)",
        "NAD83 / Illinois East (ftUS)",
        "NAD83 / Illinois West (ftUS)",
        "NAD83 / New Hampshire (ftUS)",
        "NAD83 / Rhode Island (ftUS)",
    ]),
    run(3441, &[
        "NAD83(HARN) / Arkansas North (ftUS)",
        "NAD83(HARN) / Arkansas South (ftUS)",
        "NAD83(HARN) / Illinois East (ftUS)",
        "NAD83(HARN) / Illinois West (ftUS)",
        "NAD83(HARN) / New Hampshire (ftUS)",
        "NAD83(HARN) / Rhode Island (ftUS)",
        "ETRS89 / Belgian Lambert 2005",
        "JAD2001 / Jamaica Metric Grid",
    ]),
    run(3451, &[
        "NAD83 / Louisiana North (ftUS)",
        "NAD83 / Louisiana South (ftUS)",
        "NAD83 / Louisiana Offshore (ftUS)",
        "NAD83 / South Dakota North (ftUS)",
        "NAD83 / South Dakota South (ftUS)",
        "NAD83(HARN) / Louisiana North (ftUS)",
        "NAD83(HARN) / Louisiana South (ftUS)",
        "NAD83(HARN) / South Dakota North (ftUS)",
        "NAD83(HARN) / South Dakota South (ftUS)",
    ]),
    run(3463, &[
        "NAD83 / Maine CS2000 Central",
        "NAD83(HARN) / Maine CS2000 Central",
        "NAD83(NSRS2007) / Alabama East",
        "NAD83(NSRS2007) / Alabama West",
        "NAD83(NSRS2007) / Alaska Albers",
        "NAD83(NSRS2007) / Alaska zone 1",
        "NAD83(NSRS2007) / Alaska zone 2",
        "NAD83(NSRS2007) / Alaska zone 3",
        "NAD83(NSRS2007) / Alaska zone 4",
        "NAD83(NSRS2007) / Alaska zone 5",
        "NAD83(NSRS2007) / Alaska zone 6",
        "NAD83(NSRS2007) / Alaska zone 7",
        "NAD83(NSRS2007) / Alaska zone 8",
        "NAD83(NSRS2007) / Alaska zone 9",
        "NAD83(NSRS2007) / Alaska zone 10",
        "NAD83(NSRS2007) / Arizona Central",
        "NAD83(NSRS2007) / Arizona Central (ft)",
        "NAD83(NSRS2007) / Arizona East",
        "NAD83(NSRS2007) / Arizona East (ft)",
        "NAD83(NSRS2007) / Arizona West",
        "NAD83(NSRS2007) / Arizona West (ft)",
        "NAD83(NSRS2007) / Arkansas North",
        "NAD83(NSRS2007) / Arkansas North (ftUS)",
        "NAD83(NSRS2007) / Arkansas South",
        "NAD83(NSRS2007) / Arkansas South (ftUS)",
        "NAD83(NSRS2007) / California Albers",
        "NAD83(NSRS2007) / California zone 1",
        "NAD83(NSRS2007) / California zone 1 (ftUS)",
        "NAD83(NSRS2007) / California zone 2",
        "NAD83(NSRS2007) / California zone 2 (ftUS)",
        "NAD83(NSRS2007) / California zone 3",
        "NAD83(NSRS2007) / California zone 3 (ftUS)",
        "NAD83(NSRS2007) / California zone 4",
        "NAD83(NSRS2007) / California zone 4 (ftUS)",
        "NAD83(NSRS2007) / California zone 5",
        "NAD83(NSRS2007) / California zone 5 (ftUS)",
        "NAD83(NSRS2007) / California zone 6",
        "NAD83(NSRS2007) / California zone 6 (ftUS)",
        "NAD83(NSRS2007) / Colorado Central",
        "NAD83(NSRS2007) / Colorado Central (ftUS)",
        "NAD83(NSRS2007) / Colorado North",
        "NAD83(NSRS2007) / Colorado North (ftUS)",
        "NAD83(NSRS2007) / Colorado South",
        "NAD83(NSRS2007) / Colorado South (ftUS)",
        "NAD83(NSRS2007) / Connecticut",
        "NAD83(NSRS2007) / Connecticut (ftUS)",
        "NAD83(NSRS2007) / Delaware",
        "NAD83(NSRS2007) / Delaware (ftUS)",
        "NAD83(NSRS2007) / Florida East",
        "NAD83(NSRS2007) / Florida East (ftUS)",
        "NAD83(NSRS2007) / Florida GDL Albers",
        "NAD83(NSRS2007) / Florida North",
        "NAD83(NSRS2007) / Florida North (ftUS)",
        "NAD83(NSRS2007) / Florida West",
        "NAD83(NSRS2007) / Florida West (ftUS)",
        "NAD83(NSRS2007) / Georgia East",
        "NAD83(NSRS2007) / Georgia East (ftUS)",
        "NAD83(NSRS2007) / Georgia West",
        "NAD83(NSRS2007) / Georgia West (ftUS)",
        "NAD83(NSRS2007) / Idaho Central",
        "NAD83(NSRS2007) / Idaho Central (ftUS)",
        "NAD83(NSRS2007) / Idaho East",
        "NAD83(NSRS2007) / Idaho East (ftUS)",
        "NAD83(NSRS2007) / Idaho West",
        "NAD83(NSRS2007) / Idaho West (ftUS)",
        "NAD83(NSRS2007) / Illinois East",
        "NAD83(NSRS2007) / Illinois East (ftUS)",
        "NAD83(NSRS2007) / Illinois West",
        "NAD83(NSRS2007) / Illinois West (ftUS)",
        "NAD83(NSRS2007) / Indiana East",
        "NAD83(NSRS2007) / Indiana East (ftUS)",
        "NAD83(NSRS2007) / Indiana West",
        "NAD83(NSRS2007) / Indiana West (ftUS)",
        "NAD83(NSRS2007) / Iowa North",
        "NAD83(NSRS2007) / Iowa North (ftUS)",
        "NAD83(NSRS2007) / Iowa South",
        "NAD83(NSRS2007) / Iowa South (ftUS)",
        "NAD83(NSRS2007) / Kansas North",
        "NAD83(NSRS2007) / Kansas North (ftUS)",
        "NAD83(NSRS2007) / Kansas South",
        "NAD83(NSRS2007) / Kansas South (ftUS)",
        "NAD83(NSRS2007) / Kentucky North",
        "NAD83(NSRS2007) / Kentucky North (ftUS)",
        "NAD83(NSRS2007) / Kentucky Single Zone",
        "NAD83(NSRS2007) / Kentucky Single Zone (ftUS)",
        "NAD83(NSRS2007) / Kentucky South",
        "NAD83(NSRS2007) / Kentucky South (ftUS)",
        "NAD83(NSRS2007) / Louisiana North",
        "NAD83(NSRS2007) / Louisiana North (ftUS)",
        "NAD83(NSRS2007) / Louisiana South",
        "NAD83(NSRS2007) / Louisiana South (ftUS)",
        "NAD83(NSRS2007) / Maine CS2000 Central",
        "NAD83(NSRS2007) / Maine CS2000 East",
        "NAD83(NSRS2007) / Maine CS2000 West",
        "NAD83(NSRS2007) / Maine East",
        "NAD83(NSRS2007) / Maine West",
        "NAD83(NSRS2007) / Maryland",
        "NAD83 / Utah North (ftUS)",
        "Old Hawaiian / Hawaii zone 1",
        "Old Hawaiian / Hawaii zone 2",
        "Old Hawaiian / Hawaii zone 3",
        "Old Hawaiian / Hawaii zone 4",
        "Old Hawaiian / Hawaii zone 5",
        "NAD83 / Utah Central (ftUS)",
        "NAD83 / Utah South (ftUS)",
        "NAD83(NSRS2007) / Utah North (ftUS)",
        "NAD83(NSRS2007) / Utah Central (ftUS)",
        "NAD83(NSRS2007) / Utah South (ftUS)",
        "WGS 84 / North Pole LAEA Bering Sea",
        "WGS 84 / North Pole LAEA Alaska",
        "WGS 84 / North Pole LAEA Canada",
        "WGS 84 / North Pole LAEA Atlantic",
        "WGS 84 / North Pole LAEA Europe",
        "WGS 84 / North Pole LAEA Russia",
        "GDA94 / Australian Albers",
        "NAD83 / Yukon Albers",
        "NAD83(CSRS) / Yukon Albers",
        "NAD83 / NWT Lambert",
        "NAD83(CSRS) / NWT Lambert",
        "NAD83(NSRS2007) / Maryland (ftUS)",
        "NAD83(NSRS2007) / Massachusetts Island",
        "NAD83(NSRS2007) / Massachusetts Island (ftUS)",
        "NAD83(NSRS2007) / Massachusetts Mainland",
        "NAD83(NSRS2007) / Massachusetts Mainland (ftUS)",
        "NAD83(NSRS2007) / Michigan Central",
        "NAD83(NSRS2007) / Michigan Central (ft)",
        "NAD83(NSRS2007) / Michigan North",
        "NAD83(NSRS2007) / Michigan North (ft)",
        "NAD83(NSRS2007) / Michigan Oblique Mercator",
        "NAD83(NSRS2007) / Michigan South",
        "NAD83(NSRS2007) / Michigan South (ft)",
        "NAD83(NSRS2007) / Minnesota Central",
        "NAD83(NSRS2007) / Minnesota North",
        "NAD83(NSRS2007) / Minnesota South",
        "NAD83(NSRS2007) / Mississippi East",
        "NAD83(NSRS2007) / Mississippi East (ftUS)",
        "NAD83(NSRS2007) / Mississippi West",
        "NAD83(NSRS2007) / Mississippi West (ftUS)",
        "NAD83(NSRS2007) / Missouri Central",
        "NAD83(NSRS2007) / Missouri East",
        "NAD83(NSRS2007) / Missouri West",
        "NAD83(NSRS2007) / Montana",
        "NAD83(NSRS2007) / Montana (ft)",
        "NAD83(NSRS2007) / Nebraska",
        "NAD83(NSRS2007) / Nevada Central",
        "NAD83(NSRS2007) / Nevada Central (ft US)",
        "NAD83(NSRS2007) / Nevada East",
        "NAD83(NSRS2007) / Nevada East (ft US)",
        "NAD83(NSRS2007) / Nevada West",
        "NAD83(NSRS2007) / Nevada West (ft US)",
        "NAD83(NSRS2007) / New Hampshire",
        "NAD83(NSRS2007) / New Hampshire (ftUS)",
        "NAD83(NSRS2007) / New Jersey",
        "NAD83(NSRS2007) / New Jersey (ftUS)",
        "NAD83(NSRS2007) / New Mexico Central",
        "NAD83(NSRS2007) / New Mexico Central (ftUS)",
        "NAD83(NSRS2007) / New Mexico East",
        "NAD83(NSRS2007) / New Mexico East (ftUS)",
        "NAD83(NSRS2007) / New Mexico West",
        "NAD83(NSRS2007) / New Mexico West (ftUS)",
        "NAD83(NSRS2007) / New York Central",
        "NAD83(NSRS2007) / New York Central (ftUS)",
        "NAD83(NSRS2007) / New York East",
        "NAD83(NSRS2007) / New York East (ftUS)",
        "NAD83(NSRS2007) / New York Long Island",
        "NAD83(NSRS2007) / New York Long Island (ftUS)",
        "NAD83(NSRS2007) / New York West",
        "NAD83(NSRS2007) / New York West (ftUS)",
        "NAD83(NSRS2007) / North Carolina",
        "NAD83(NSRS2007) / North Carolina (ftUS)",
        "NAD83(NSRS2007) / North Dakota North",
        "NAD83(NSRS2007) / North Dakota North (ft)",
        "NAD83(NSRS2007) / North Dakota South",
        "NAD83(NSRS2007) / North Dakota South (ft)",
        "NAD83(NSRS2007) / Ohio North",
        "NAD83(NSRS2007) / Ohio South",
        "NAD83(NSRS2007) / Oklahoma North",
        "NAD83(NSRS2007) / Oklahoma North (ftUS)",
        "NAD83(NSRS2007) / Oklahoma South",
        "NAD83(NSRS2007) / Oklahoma South (ftUS)",
        "NAD83(NSRS2007) / Oregon LCC (m)",
        "NAD83(NSRS2007) / Oregon GIC Lambert (ft)",
        "NAD83(NSRS2007) / Oregon North",
        "NAD83(NSRS2007) / Oregon North (ft)",
        "NAD83(NSRS2007) / Oregon South",
        "NAD83(NSRS2007) / Oregon South (ft)",
        "NAD83(NSRS2007) / Pennsylvania North",
        "NAD83(NSRS2007) / Pennsylvania North (ftUS)",
        "NAD83(NSRS2007) / Pennsylvania South",
        "NAD83(NSRS2007) / Pennsylvania South (ftUS)",
        "NAD83(NSRS2007) / Rhode Island",
        "NAD83(NSRS2007) / Rhode Island (ftUS)",
        "NAD83(NSRS2007) / South Carolina",
        "NAD83(NSRS2007) / South Carolina (ft)",
        "NAD83(NSRS2007) / South Dakota North",
        "NAD83(NSRS2007) / South Dakota North (ftUS)",
        "NAD83(NSRS2007) / South Dakota South",
        "NAD83(NSRS2007) / South Dakota South (ftUS)",
        "NAD83(NSRS2007) / Tennessee",
        "NAD83(NSRS2007) / Tennessee (ftUS)",
        "NAD83(NSRS2007) / Texas Central",
        "NAD83(NSRS2007) / Texas Central (ftUS)",
        "NAD83(NSRS2007) / Texas Centric Albers Equal Area",
        "NAD83(NSRS2007) / Texas Centric Lambert Conformal",
        "NAD83(NSRS2007) / Texas North",
        "NAD83(NSRS2007) / Texas North (ftUS)",
        "NAD83(NSRS2007) / Texas North Central",
        "NAD83(NSRS2007) / Texas North Central (ftUS)",
        "NAD83(NSRS2007) / Texas South",
        "NAD83(NSRS2007) / Texas South (ftUS)",
        "NAD83(NSRS2007) / Texas South Central",
        "NAD83(NSRS2007) / Texas South Central (ftUS)",
        "NAD83(NSRS2007) / Utah Central",
        "NAD83(NSRS2007) / Utah Central (ft)",
        "NAD83(NSRS2007) / Utah Central (ftUS)",
        "NAD83(NSRS2007) / Utah North",
        "NAD83(NSRS2007) / Utah North (ft)",
        "NAD83(NSRS2007) / Utah North (ftUS)",
        "NAD83(NSRS2007) / Utah South",
        "NAD83(NSRS2007) / Utah South (ft)",
        "NAD83(NSRS2007) / Utah South (ftUS)",
        "NAD83(NSRS2007) / Vermont",
        "NAD83(NSRS2007) / Virginia North",
        "NAD83(NSRS2007) / Virginia North (ftUS)",
        "NAD83(NSRS2007) / Virginia South",
        "NAD83(NSRS2007) / Virginia South (ftUS)",
        "NAD83(NSRS2007) / Washington North",
        "NAD83(NSRS2007) / Washington North (ftUS)",
        "NAD83(NSRS2007) / Washington South",
        "NAD83(NSRS2007) / Washington South (ftUS)",
        "NAD83(NSRS2007) / West Virginia North",
        "NAD83(NSRS2007) / West Virginia South",
        "NAD83(NSRS2007) / Wisconsin Central",
        "NAD83(NSRS2007) / Wisconsin Central (ftUS)",
        "NAD83(NSRS2007) / Wisconsin North",
        "NAD83(NSRS2007) / Wisconsin North (ftUS)",
        "NAD83(NSRS2007) / Wisconsin South",
        "NAD83(NSRS2007) / Wisconsin South (ftUS)",
        "NAD83(NSRS2007) / Wisconsin Transverse Mercator",
        "NAD83(NSRS2007) / Wyoming East",
        "NAD83(NSRS2007) / Wyoming East Central",
        "NAD83(NSRS2007) / Wyoming West Central",
        "NAD83(NSRS2007) / Wyoming West",
    ]),
    run(3728, &[
        "NAD83(NSRS2007) / Ohio North (ftUS)",
        "NAD83(NSRS2007) / Ohio South (ftUS)",
        "NAD83(NSRS2007) / Wyoming East (ftUS)",
        "NAD83(NSRS2007) / Wyoming East Central (ftUS)",
        "NAD83(NSRS2007) / Wyoming West Central (ftUS)",
        "NAD83(NSRS2007) / Wyoming West (ftUS)",
        "NAD83 / Ohio North (ftUS)",
        "NAD83 / Ohio South (ftUS)",
        "NAD83 / Wyoming East (ftUS)",
        "NAD83 / Wyoming East Central (ftUS)",
        "NAD83 / Wyoming West Central (ftUS)",
        "NAD83 / Wyoming West (ftUS)",
    ]),
    run(3753, &[
        "NAD83(HARN) / Ohio North (ftUS)",
        "NAD83(HARN) / Ohio South (ftUS)",
        "NAD83(HARN) / Wyoming East (ftUS)",
        "NAD83(HARN) / Wyoming East Central (ftUS)",
        "NAD83(HARN) / Wyoming West Central (ftUS)",
        "NAD83(HARN) / Wyoming West (ftUS)",
        "NAD83 / Hawaii zone 3 (ftUS)",
        "NAD83(HARN) / Hawaii zone 3 (ftUS)",
    ]),
    run(3794, &["Slovenia 1996 / Slovene National Grid"]),
    run(3844, &["Pulkovo 1942(58) / Stereo70"]),
    run(3857, &["WGS 84 / Pseudo-Mercator"]),
    run(3912, &["MGI 1901 / Slovene National Grid"]),
    run(3976, &["WGS 84 / NSIDC Sea Ice Polar Stereographic South"]),
    run(3978, &[
        "NAD83 / Canada Atlas Lambert",
        "NAD83(CSRS) / Canada Atlas Lambert",
    ]),
    run(3995, &[
        "WGS 84 / Arctic Polar Stereographic",
        "WGS 84 / IBCAO Polar Stereographic",
    ]),
    run(4087, &[
        "WGS 84 / World Equidistant Cylindrical",
        "World Equidistant Cylindrical (Sphere)",
    ]),
    run(4124, &["RT90"]),
    run(4140, &["NAD83(CSRS98)"]),
    run(4148, &[
        "Hartebeesthoek94",
        "CH1903",
        "CH1903+",
    ]),
    run(4152, &["NAD83(HARN)"]),
    run(4167, &["NZGD2000"]),
    run(4171, &["RGF93"]),
    run(4202, &[
        "AGD66",
        "AGD84",
    ]),
    run(4214, &["Beijing 1954"]),
    run(4230, &["ED50"]),
    run(4258, &["ETRS89"]),
    run(4267, &["NAD27"]),
    run(4269, &["NAD83"]),
    run(4272, &["NZGD49"]),
    run(4275, &["NTF"]),
    run(4277, &["OSGB 1936"]),
    run(4283, &[
        "GDA94",
        "Pulkovo 1942",
    ]),
    run(4289, &["Amersfoort"]),
    run(4301, &["Tokyo"]),
    run(4313, &[
        "Belge 1972",
        "DHDN",
    ]),
    run(4322, &["WGS 72"]),
    run(4324, &["WGS 72BE"]),
    run(4326, &["WGS 84"]),
    run(4490, &[
        "China Geodetic Coordinate System 2000",
        "CGCS2000 / Gauss-Kruger zone 13",
        "CGCS2000 / Gauss-Kruger zone 14",
        "CGCS2000 / Gauss-Kruger zone 15",
        "CGCS2000 / Gauss-Kruger zone 16",
        "CGCS2000 / Gauss-Kruger zone 17",
        "CGCS2000 / Gauss-Kruger zone 18",
        "CGCS2000 / Gauss-Kruger zone 19",
        "CGCS2000 / Gauss-Kruger zone 20",
        "CGCS2000 / Gauss-Kruger zone 21",
        "CGCS2000 / Gauss-Kruger zone 22",
        "CGCS2000 / Gauss-Kruger zone 23",
        "CGCS2000 / Gauss-Kruger CM 75E",
        "CGCS2000 / Gauss-Kruger CM 81E",
        "CGCS2000 / Gauss-Kruger CM 87E",
        "CGCS2000 / Gauss-Kruger CM 93E",
        "CGCS2000 / Gauss-Kruger CM 99E",
        "CGCS2000 / Gauss-Kruger CM 105E",
        "CGCS2000 / Gauss-Kruger CM 111E",
        "CGCS2000 / Gauss-Kruger CM 117E",
        "CGCS2000 / Gauss-Kruger CM 123E",
        "CGCS2000 / Gauss-Kruger CM 129E",
        "CGCS2000 / Gauss-Kruger CM 135E",
        "CGCS2000 / 3-degree Gauss-Kruger zone 25",
        "CGCS2000 / 3-degree Gauss-Kruger zone 26",
        "CGCS2000 / 3-degree Gauss-Kruger zone 27",
        "CGCS2000 / 3-degree Gauss-Kruger zone 28",
        "CGCS2000 / 3-degree Gauss-Kruger zone 29",
        "CGCS2000 / 3-degree Gauss-Kruger zone 30",
        "CGCS2000 / 3-degree Gauss-Kruger zone 31",
        "CGCS2000 / 3-degree Gauss-Kruger zone 32",
        "CGCS2000 / 3-degree Gauss-Kruger zone 33",
        "CGCS2000 / 3-degree Gauss-Kruger zone 34",
        "CGCS2000 / 3-degree Gauss-Kruger zone 35",
        "CGCS2000 / 3-degree Gauss-Kruger zone 36",
        "CGCS2000 / 3-degree Gauss-Kruger zone 37",
        "CGCS2000 / 3-degree Gauss-Kruger zone 38",
        "CGCS2000 / 3-degree Gauss-Kruger zone 39",
        "CGCS2000 / 3-degree Gauss-Kruger zone 40",
        "CGCS2000 / 3-degree Gauss-Kruger zone 41",
        "CGCS2000 / 3-degree Gauss-Kruger zone 42",
        "CGCS2000 / 3-degree Gauss-Kruger zone 43",
        "CGCS2000 / 3-degree Gauss-Kruger zone 44",
        "CGCS2000 / 3-degree Gauss-Kruger zone 45",
        "CGCS2000 / 3-degree Gauss-Kruger CM 75E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 78E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 81E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 84E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 87E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 90E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 93E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 96E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 99E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 102E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 105E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 108E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 111E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 114E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 117E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 120E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 123E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 126E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 129E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 132E",
        "CGCS2000 / 3-degree Gauss-Kruger CM 135E",
    ]),
    run(4610, &["Xian 1980"]),
    run(4612, &["JGD2000"]),
    run(4617, &[
        "NAD83(CSRS)",
        "SAD69",
        "SWEREF99",
    ]),
    run(4674, &["SIRGAS 2000"]),
    run(4737, &["Korea 2000"]),
    run(4759, &["NAD83(NSRS2007)"]),
    run(4978, &[
        "WGS 84 (geocentric)",
        "WGS 84 (3D)",
    ]),
    run(5070, &["NAD83 / Conus Albers"]),
    run(5105, &[
        "ETRS89 / NTM zone 5",
        "ETRS89 / NTM zone 6",
        "ETRS89 / NTM zone 7",
        "ETRS89 / NTM zone 8",
        "ETRS89 / NTM zone 9",
        "ETRS89 / NTM zone 10",
        "ETRS89 / NTM zone 11",
        "ETRS89 / NTM zone 12",
        "ETRS89 / NTM zone 13",
        "ETRS89 / NTM zone 14",
        "ETRS89 / NTM zone 15",
        "ETRS89 / NTM zone 16",
        "ETRS89 / NTM zone 17",
        "ETRS89 / NTM zone 18",
        "ETRS89 / NTM zone 19",
        "ETRS89 / NTM zone 20",
        "ETRS89 / NTM zone 21",
        "ETRS89 / NTM zone 22",
        "ETRS89 / NTM zone 23",
        "ETRS89 / NTM zone 24",
        "ETRS89 / NTM zone 25",
        "ETRS89 / NTM zone 26",
        "ETRS89 / NTM zone 27",
        "ETRS89 / NTM zone 28",
        "ETRS89 / NTM zone 29",
        "ETRS89 / NTM zone 30",
    ]),
    run(5179, &["Korea 2000 / Unified CS"]),
    run(5185, &[
        "Korea 2000 / West Belt 2010",
        "Korea 2000 / Central Belt 2010",
        "Korea 2000 / East Belt 2010",
        "Korea 2000 / East Sea Belt 2010",
    ]),
    run(5514, &["S-JTSK / Krovak East North"]),
    run(5650, &["ETRS89 / UTM zone 33N (zE-N)"]),
    run(6318, &["NAD83(2011)"]),
    run(6350, &["NAD83(2011) / Conus Albers"]),
    run(6355, &[
        "NAD83(2011) / Alabama East",
        "NAD83(2011) / Alabama West",
    ]),
    run(6362, &["Mexico ITRF92 / LCC"]),
    run(6372, &["Mexico ITRF2008 / LCC"]),
    run(6393, &[
        "NAD83(2011) / Alaska Albers",
        "NAD83(2011) / Alaska zone 1",
        "NAD83(2011) / Alaska zone 2",
        "NAD83(2011) / Alaska zone 3",
        "NAD83(2011) / Alaska zone 4",
        "NAD83(2011) / Alaska zone 5",
        "NAD83(2011) / Alaska zone 6",
        "NAD83(2011) / Alaska zone 7",
        "NAD83(2011) / Alaska zone 8",
        "NAD83(2011) / Alaska zone 9",
        "NAD83(2011) / Alaska zone 10",
        "NAD83(2011) / Arizona Central",
        "NAD83(2011) / Arizona Central (ft)",
        "NAD83(2011) / Arizona East",
        "NAD83(2011) / Arizona East (ft)",
        "NAD83(2011) / Arizona West",
        "NAD83(2011) / Arizona West (ft)",
        "NAD83(2011) / Arkansas North",
        "NAD83(2011) / Arkansas North (ftUS)",
        "NAD83(2011) / Arkansas South",
        "NAD83(2011) / Arkansas South (ftUS)",
        "NAD83(2011) / California Albers",
        "NAD83(2011) / California zone 1",
        "NAD83(2011) / California zone 1 (ftUS)",
        "NAD83(2011) / California zone 2",
        "NAD83(2011) / California zone 2 (ftUS)",
        "NAD83(2011) / California zone 3",
        "NAD83(2011) / California zone 3 (ftUS)",
        "NAD83(2011) / California zone 4",
        "NAD83(2011) / California zone 4 (ftUS)",
        "NAD83(2011) / California zone 5",
        "NAD83(2011) / California zone 5 (ftUS)",
        "NAD83(2011) / California zone 6",
        "NAD83(2011) / California zone 6 (ftUS)",
        "NAD83(2011) / Colorado Central",
        "NAD83(2011) / Colorado Central (ftUS)",
        "NAD83(2011) / Colorado North",
        "NAD83(2011) / Colorado North (ftUS)",
        "NAD83(2011) / Colorado South",
        "NAD83(2011) / Colorado South (ftUS)",
        "NAD83(2011) / Connecticut",
        "NAD83(2011) / Connecticut (ftUS)",
        "NAD83(2011) / Delaware",
        "NAD83(2011) / Delaware (ftUS)",
        "NAD83(2011) / Florida East",
        "NAD83(2011) / Florida East (ftUS)",
        "NAD83(2011) / Florida GDL Albers",
        "NAD83(2011) / Florida North",
        "NAD83(2011) / Florida North (ftUS)",
        "NAD83(2011) / Florida West",
        "NAD83(2011) / Florida West (ftUS)",
        "NAD83(2011) / Georgia East",
        "NAD83(2011) / Georgia East (ftUS)",
        "NAD83(2011) / Georgia West",
        "NAD83(2011) / Georgia West (ftUS)",
        "NAD83(2011) / Idaho Central",
        "NAD83(2011) / Idaho Central (ftUS)",
        "NAD83(2011) / Idaho East",
        "NAD83(2011) / Idaho East (ftUS)",
        "NAD83(2011) / Idaho West",
        "NAD83(2011) / Idaho West (ftUS)",
        "NAD83(2011) / Illinois East",
        "NAD83(2011) / Illinois East (ftUS)",
        "NAD83(2011) / Illinois West",
        "NAD83(2011) / Illinois West (ftUS)",
        "NAD83(2011) / Indiana East",
        "NAD83(2011) / Indiana East (ftUS)",
        "NAD83(2011) / Indiana West",
        "NAD83(2011) / Indiana West (ftUS)",
        "NAD83(2011) / Iowa North",
        "NAD83(2011) / Iowa North (ftUS)",
        "NAD83(2011) / Iowa South",
        "NAD83(2011) / Iowa South (ftUS)",
        "NAD83(2011) / Kansas North",
        "NAD83(2011) / Kansas North (ftUS)",
        "NAD83(2011) / Kansas South",
        "NAD83(2011) / Kansas South (ftUS)",
        "NAD83(2011) / Kentucky North",
        "NAD83(2011) / Kentucky North (ftUS)",
        "NAD83(2011) / Kentucky Single Zone",
        "NAD83(2011) / Kentucky Single Zone (ftUS)",
        "NAD83(2011) / Kentucky South",
        "NAD83(2011) / Kentucky South (ftUS)",
        "NAD83(2011) / Louisiana North",
        "NAD83(2011) / Louisiana North (ftUS)",
        "NAD83(2011) / Louisiana South",
        "NAD83(2011) / Louisiana South (ftUS)",
        "NAD83(2011) / Maine CS2000 Central",
        "NAD83(2011) / Maine CS2000 East",
        "NAD83(2011) / Maine CS2000 West",
        "NAD83(2011) / Maine East",
        "NAD83(2011) / Maine East (ftUS)",
        "NAD83(2011) / Maine West",
        "NAD83(2011) / Maine West (ftUS)",
        "NAD83(2011) / Maryland",
        "NAD83(2011) / Maryland (ftUS)",
        "NAD83(2011) / Massachusetts Island",
        "NAD83(2011) / Massachusetts Island (ftUS)",
        "NAD83(2011) / Massachusetts Mainland",
        "NAD83(2011) / Massachusetts Mainland (ftUS)",
        "NAD83(2011) / Michigan Central",
        "NAD83(2011) / Michigan Central (ft)",
        "NAD83(2011) / Michigan North",
        "NAD83(2011) / Michigan North (ft)",
        "NAD83(2011) / Michigan Oblique Mercator",
        "NAD83(2011) / Michigan South",
        "NAD83(2011) / Michigan South (ft)",
        "NAD83(2011) / Minnesota Central",
        "NAD83(2011) / Minnesota Central (ftUS)",
        "NAD83(2011) / Minnesota North",
        "NAD83(2011) / Minnesota North (ftUS)",
        "NAD83(2011) / Minnesota South",
        "NAD83(2011) / Minnesota South (ftUS)",
        "NAD83(2011) / Mississippi East",
        "NAD83(2011) / Mississippi East (ftUS)",
        "NAD83(2011) / Mississippi TM",
        "NAD83(2011) / Mississippi West",
        "NAD83(2011) / Mississippi West (ftUS)",
        "NAD83(2011) / Missouri Central",
        "NAD83(2011) / Missouri East",
        "NAD83(2011) / Missouri West",
        "NAD83(2011) / Montana",
        "NAD83(2011) / Montana (ft)",
        "NAD83(2011) / Nebraska",
        "NAD83(2011) / Nebraska (ftUS)",
        "NAD83(2011) / Nevada Central",
        "NAD83(2011) / Nevada Central (ftUS)",
        "NAD83(2011) / Nevada East",
        "NAD83(2011) / Nevada East (ftUS)",
        "NAD83(2011) / Nevada West",
        "NAD83(2011) / Nevada West (ftUS)",
        "NAD83(2011) / New Hampshire",
        "NAD83(2011) / New Hampshire (ftUS)",
        "NAD83(2011) / New Jersey",
        "NAD83(2011) / New Jersey (ftUS)",
        "NAD83(2011) / New Mexico Central",
        "NAD83(2011) / New Mexico Central (ftUS)",
        "NAD83(2011) / New Mexico East",
        "NAD83(2011) / New Mexico East (ftUS)",
        "NAD83(2011) / New Mexico West",
        "NAD83(2011) / New Mexico West (ftUS)",
        "NAD83(2011) / New York Central",
        "NAD83(2011) / New York Central (ftUS)",
        "NAD83(2011) / New York East",
        "NAD83(2011) / New York East (ftUS)",
        "NAD83(2011) / New York Long Island",
        "NAD83(2011) / New York Long Island (ftUS)",
        "NAD83(2011) / New York West",
        "NAD83(2011) / New York West (ftUS)",
        "NAD83(2011) / North Carolina",
        "NAD83(2011) / North Carolina (ftUS)",
        "NAD83(2011) / North Dakota North",
        "NAD83(2011) / North Dakota North (ft)",
        "NAD83(2011) / North Dakota South",
        "NAD83(2011) / North Dakota South (ft)",
        "NAD83(2011) / Ohio North",
        "NAD83(2011) / Ohio North (ftUS)",
        "NAD83(2011) / Ohio South",
        "NAD83(2011) / Ohio South (ftUS)",
        "NAD83(2011) / Oklahoma North",
        "NAD83(2011) / Oklahoma North (ftUS)",
        "NAD83(2011) / Oklahoma South",
        "NAD83(2011) / Oklahoma South (ftUS)",
        "NAD83(2011) / Oregon LCC (m)",
        "NAD83(2011) / Oregon GIC Lambert (ft)",
        "NAD83(2011) / Oregon North",
        "NAD83(2011) / Oregon North (ft)",
        "NAD83(2011) / Oregon South",
        "NAD83(2011) / Oregon South (ft)",
        "NAD83(2011) / Pennsylvania North",
        "NAD83(2011) / Pennsylvania North (ftUS)",
        "NAD83(2011) / Pennsylvania South",
        "NAD83(2011) / Pennsylvania South (ftUS)",
        "NAD83(2011) / Puerto Rico and Virgin Is.",
        "NAD83(2011) / Rhode Island",
        "NAD83(2011) / Rhode Island (ftUS)",
        "NAD83(2011) / South Carolina",
        "NAD83(2011) / South Carolina (ft)",
        "NAD83(2011) / South Dakota North",
        "NAD83(2011) / South Dakota North (ftUS)",
        "NAD83(2011) / South Dakota South",
        "NAD83(2011) / South Dakota South (ftUS)",
        "NAD83(2011) / Tennessee",
        "NAD83(2011) / Tennessee (ftUS)",
        "NAD83(2011) / Texas Central",
        "NAD83(2011) / Texas Central (ftUS)",
        "NAD83(2011) / Texas Centric Albers Equal Area",
        "NAD83(2011) / Texas Centric Lambert Conformal",
        "NAD83(2011) / Texas North",
        "NAD83(2011) / Texas North (ftUS)",
        "NAD83(2011) / Texas North Central",
        "NAD83(2011) / Texas North Central (ftUS)",
        "NAD83(2011) / Texas South",
        "NAD83(2011) / Texas South (ftUS)",
        "NAD83(2011) / Texas South Central",
        "NAD83(2011) / Texas South Central (ftUS)",
        "NAD83(2011) / Vermont",
        "NAD83(2011) / Vermont (ftUS)",
        "NAD83(2011) / Virginia Lambert",
        "NAD83(2011) / Virginia North",
        "NAD83(2011) / Virginia North (ftUS)",
        "NAD83(2011) / Virginia South",
        "NAD83(2011) / Virginia South (ftUS)",
        "NAD83(2011) / Washington North",
        "NAD83(2011) / Washington North (ftUS)",
        "NAD83(2011) / Washington South",
        "NAD83(2011) / Washington South (ftUS)",
        "NAD83(2011) / West Virginia North",
        "NAD83(2011) / West Virginia North (ftUS)",
        "NAD83(2011) / West Virginia South",
        "NAD83(2011) / West Virginia South (ftUS)",
        "NAD83(2011) / Wisconsin Central",
        "NAD83(2011) / Wisconsin Central (ftUS)",
        "NAD83(2011) / Wisconsin North",
        "NAD83(2011) / Wisconsin North (ftUS)",
        "NAD83(2011) / Wisconsin South",
        "NAD83(2011) / Wisconsin South (ftUS)",
        "NAD83(2011) / Wisconsin Transverse Mercator",
        "NAD83(2011) / Wyoming East",
        "NAD83(2011) / Wyoming East (ftUS)",
        "NAD83(2011) / Wyoming East Central",
        "NAD83(2011) / Wyoming East Central (ftUS)",
        "NAD83(2011) / Wyoming West",
        "NAD83(2011) / Wyoming West (ftUS)",
        "NAD83(2011) / Wyoming West Central",
        "NAD83(2011) / Wyoming West Central (ftUS)",
        "NAD83(2011) / Utah Central",
        "NAD83(2011) / Utah North",
        "NAD83(2011) / Utah South",
        "NAD83(CSRS) / Quebec Lambert",
        "NAD83 / Quebec Albers",
        "NAD83(CSRS) / Quebec Albers",
        "NAD83(2011) / Utah Central (ftUS)",
        "NAD83(2011) / Utah North (ftUS)",
        "NAD83(2011) / Utah South (ftUS)",
        "NAD83(PA11) / Hawaii zone 1",
        "NAD83(PA11) / Hawaii zone 2",
        "NAD83(PA11) / Hawaii zone 3",
        "NAD83(PA11) / Hawaii zone 4",
        "NAD83(PA11) / Hawaii zone 5",
        "NAD83(PA11) / Hawaii zone 3 (ftUS)",
        "NAD83(PA11) / UTM zone 4N",
        "NAD83(PA11) / UTM zone 5N",
        "NAD83(PA11) / UTM zone 2S",
        "NAD83(MA11) / Guam Map Grid",
    ]),
    run(6668, &[
        "JGD2011",
        "JGD2011 / Japan Plane Rectangular CS I",
        "JGD2011 / Japan Plane Rectangular CS II",
        "JGD2011 / Japan Plane Rectangular CS III",
        "JGD2011 / Japan Plane Rectangular CS IV",
        "JGD2011 / Japan Plane Rectangular CS V",
        "JGD2011 / Japan Plane Rectangular CS VI",
        "JGD2011 / Japan Plane Rectangular CS VII",
        "JGD2011 / Japan Plane Rectangular CS VIII",
        "JGD2011 / Japan Plane Rectangular CS IX",
        "JGD2011 / Japan Plane Rectangular CS X",
        "JGD2011 / Japan Plane Rectangular CS XI",
        "JGD2011 / Japan Plane Rectangular CS XII",
        "JGD2011 / Japan Plane Rectangular CS XIII",
        "JGD2011 / Japan Plane Rectangular CS XIV",
        "JGD2011 / Japan Plane Rectangular CS XV",
        "JGD2011 / Japan Plane Rectangular CS XVI",
        "JGD2011 / Japan Plane Rectangular CS XVII",
        "JGD2011 / Japan Plane Rectangular CS XVIII",
        "JGD2011 / Japan Plane Rectangular CS XIX",
    ]),
    run(6880, &["NAD83(2011) / Nebraska (ftUS)"]),
    run(6933, &["WGS 84 / NSIDC EASE-Grid 2.0 Global"]),
    run(7415, &["Amersfoort / RD New + NAP height"]),
    run(7844, &["GDA2020"]),
    run(8353, &["S-JTSK [JTSK03] / Krovak East North"]),
    run(21781, &["CH1903 / LV03"]),
    run(25884, &["ETRS89 / TM Baltic93"]),
    run(26731, &["NAD27 / Alaska zone 1"]),
    run(26761, &[
        "NAD27 / Hawaii zone 1",
        "NAD27 / Hawaii zone 2",
        "NAD27 / Hawaii zone 3",
        "NAD27 / Hawaii zone 4",
        "NAD27 / Hawaii zone 5",
    ]),
    run(26799, &["NAD27 / California zone VII"]),
    run(26847, &[
        "NAD83 / Maine East (ftUS)",
        "NAD83 / Maine West (ftUS)",
        "NAD83 / Minnesota North (ftUS)",
        "NAD83 / Minnesota Central (ftUS)",
        "NAD83 / Minnesota South (ftUS)",
        "NAD83 / Nebraska (ftUS)",
        "NAD83 / West Virginia North (ftUS)",
        "NAD83 / West Virginia South (ftUS)",
        "NAD83(HARN) / Maine East (ftUS)",
        "NAD83(HARN) / Maine West (ftUS)",
        "NAD83(HARN) / Minnesota North (ftUS)",
        "NAD83(HARN) / Minnesota Central (ftUS)",
        "NAD83(HARN) / Minnesota South (ftUS)",
        "NAD83(HARN) / Nebraska (ftUS)",
        "NAD83(HARN) / West Virginia North (ftUS)",
        "NAD83(HARN) / West Virginia South (ftUS)",
        "NAD83(NSRS2007) / Maine East (ftUS)",
        "NAD83(NSRS2007) / Maine West (ftUS)",
        "NAD83(NSRS2007) / Minnesota North (ftUS)",
        "NAD83(NSRS2007) / Minnesota Central (ftUS)",
        "NAD83(NSRS2007) / Minnesota South (ftUS)",
        "NAD83(NSRS2007) / Nebraska (ftUS)",
        "NAD83(NSRS2007) / West Virginia North (ftUS)",
        "NAD83(NSRS2007) / West Virginia South (ftUS)",
    ]),
    run(26931, &["NAD83 / Alaska zone 1"]),
    run(27200, &["NZGD49 / New Zealand Map Grid"]),
    run(27561, &[
        "NTF (Paris) / Lambert Nord France",
        "NTF (Paris) / Lambert Centre France",
        "NTF (Paris) / Lambert Sud France",
    ]),
    run(27572, &["NTF (Paris) / Lambert zone II"]),
    run(28992, &["Amersfoort / RD New"]),
    run(30161, &[
        "Tokyo / Japan Plane Rectangular CS I",
        "Tokyo / Japan Plane Rectangular CS II",
        "Tokyo / Japan Plane Rectangular CS III",
        "Tokyo / Japan Plane Rectangular CS IV",
        "Tokyo / Japan Plane Rectangular CS V",
        "Tokyo / Japan Plane Rectangular CS VI",
        "Tokyo / Japan Plane Rectangular CS VII",
        "Tokyo / Japan Plane Rectangular CS VIII",
        "Tokyo / Japan Plane Rectangular CS IX",
        "Tokyo / Japan Plane Rectangular CS X",
        "Tokyo / Japan Plane Rectangular CS XI",
        "Tokyo / Japan Plane Rectangular CS XII",
        "Tokyo / Japan Plane Rectangular CS XIII",
        "Tokyo / Japan Plane Rectangular CS XIV",
        "Tokyo / Japan Plane Rectangular CS XV",
        "Tokyo / Japan Plane Rectangular CS XVI",
        "Tokyo / Japan Plane Rectangular CS XVII",
        "Tokyo / Japan Plane Rectangular CS XVIII",
        "Tokyo / Japan Plane Rectangular CS XIX",
    ]),
    run(32059, &[
        "NAD27 / Puerto Rico",
        "NAD27 / St. Croix",
    ]),
    run(32181, &[
        "NAD83 / MTM zone 1",
        "NAD83 / MTM zone 2",
        "NAD83 / MTM zone 3",
        "NAD83 / MTM zone 4",
        "NAD83 / MTM zone 5",
        "NAD83 / MTM zone 6",
        "NAD83 / MTM zone 7",
        "NAD83 / MTM zone 8",
        "NAD83 / MTM zone 9",
        "NAD83 / MTM zone 10",
        "NAD83 / MTM zone 11",
        "NAD83 / MTM zone 12",
        "NAD83 / MTM zone 13",
        "NAD83 / MTM zone 14",
        "NAD83 / MTM zone 15",
        "NAD83 / MTM zone 16",
        "NAD83 / MTM zone 17",
        "NAD83 / Quebec Lambert",
        "NAD83 / Louisiana Offshore",
    ]),
    run(32661, &[
        "WGS 84 / UPS North (N,E)",
        "WGS 84 / Plate Carree",
        "WGS 84 / World Equidistant Cylindrical",
    ]),
    run(32761, &["WGS 84 / UPS South (N,E)"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_are_sorted_and_disjoint() {
        for run in RUNS {
            assert!(!run.descriptions.is_empty(), "{}", run.first);
        }
        for w in RUNS.windows(2) {
            let last = usize::from(w[0].first) + w[0].descriptions.len() - 1;
            assert!(last < usize::from(w[1].first), "{} and {}", w[0].first, w[1].first);
        }
    }

    #[test]
    fn run_edges() {
        assert_eq!(Some("NAD83 / Arizona East (ft)"), describe(2222));
        assert_eq!(Some("NAD83 / Wisconsin South (ftUS)"), describe(2289));
        assert_eq!(None, describe(2290));
        assert_eq!(None, describe(1999));
        assert_eq!(None, describe(u16::MAX));
    }

    #[test]
    fn state_plane_realizations() {
        assert_eq!(Some("NAD83(HARN) / Florida West (ftUS)"), describe(2882));
        assert_eq!(Some("NAD83(HARN) / Wisconsin South (ftUS)"), describe(2930));
        assert_eq!(Some("NAD83(NSRS2007) / Alabama East"), describe(3465));
        assert_eq!(Some("NAD83(NSRS2007) / Florida East (ftUS)"), describe(3512));
        assert_eq!(Some("NAD83(NSRS2007) / Wyoming West"), describe(3705));
        assert_eq!(Some("NAD83(2011) / Alabama East"), describe(6355));
        assert_eq!(Some("NAD83(2011) / Illinois West (ftUS)"), describe(6457));
        assert_eq!(Some("NAD83(2011) / Utah South (ftUS)"), describe(6627));
    }
}
