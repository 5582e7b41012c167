mod bi_sorted_map;
